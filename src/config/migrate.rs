//! Adds fields missing from an existing config file.
//!
//! Works on the TOML document rather than the deserialized struct so that
//! user comments, ordering and formatting survive.

use toml_edit::{DocumentMut, Item};

use super::Config;
use crate::error::ConfigError;

/// Outcome of a migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// The migrated document
    pub content: String,
    /// Dotted `section.key` names that were added
    pub added_fields: Vec<String>,
    /// Whole sections that were added
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Merge the defaults into `content` without touching existing values.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            added_fields.extend(default_table.iter().map(|(key, _)| format!("{}.{}", section, key)));
            continue;
        }

        // A scalar where a table belongs is left for the loader to report
        let Some(table) = doc[section].as_table_mut() else {
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
