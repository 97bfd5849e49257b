//! Config subcommands handler

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use sortvis::config::migrate_config;
use sortvis::tui::current_theme;
use sortvis::tui::theme::ansi;
use sortvis::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the config file is (or would be) read from.
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: &Path) -> Result<()> {
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save_to(config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    // Report problems now rather than on the next launch
    Config::load_from(config_path)?;
    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Missing fields are filled in from the defaults, a preview is shown and
/// the user is asked to confirm unless `yes` is set.
pub fn handle_migrate(config_path: &Path, yes: bool) -> Result<()> {
    let theme = current_theme();
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if !file_exists {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
        println!();
        print_diff_preview(&result.content, &[], true);
        println!();

        if !yes && !prompt_confirmation(&format!("Create {}?", config_path.display()))? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, &result.content)?;
        println!("{}", theme.success_text("Config file created successfully."));
        return Ok(());
    }

    let total_fields = result.added_fields.len();
    let total_sections = result.sections_added.len();
    if total_sections > 0 {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s) in {} new section(s):",
                total_fields, total_sections
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text(&format!("Found {} missing field(s):", total_fields))
        );
    }
    println!();

    print_diff_preview(&result.content, &result.added_fields, false);
    println!();

    if !yes
        && !prompt_confirmation(&format!(
            "Apply these changes to {}?",
            config_path.display()
        ))?
    {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    fs::write(config_path, &result.content)?;
    println!("{}", theme.success_text("Config updated successfully."));
    Ok(())
}

/// Print a diff-style preview of the config changes.
///
/// Added fields get a green `+` prefix; a new file is shown in full.
fn print_diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) {
    let mut current_section = String::new();
    let mut pending_section_header: Option<String> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current_section = trimmed[1..trimmed.len() - 1].to_string();
            let section_prefix = format!("{}.", current_section);
            let section_has_additions = added_fields.iter().any(|f| f.starts_with(&section_prefix));
            pending_section_header = (is_new_file || section_has_additions).then(|| line.to_string());
            continue;
        }

        let is_added = trimmed
            .find('=')
            .map(|eq_pos| trimmed[..eq_pos].trim())
            .is_some_and(|key| added_fields.contains(&format!("{}.{}", current_section, key)));

        if is_added || (is_new_file && !trimmed.is_empty()) {
            if let Some(header) = pending_section_header.take() {
                println!("{}+ {}{}", ansi::GREEN, header, ansi::RESET);
            }
            println!("{}+ {}{}", ansi::GREEN, line, ansi::RESET);
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
