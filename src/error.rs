//! Error types for sortvis.

use std::path::PathBuf;

/// Rejected user input.
///
/// Every variant leaves the current arrays untouched; the message is shown
/// to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Array size must be between {min} and {max}.")]
    ArraySize { min: usize, max: usize },

    #[error("Please enter at least {min} valid numbers, separated by commas.")]
    TooFewValues { min: usize },

    #[error("Maximum array length is {max}.")]
    TooManyValues { max: usize },

    #[error("All values must be between {min} and {max}.")]
    ValueOutOfRange { min: u32, max: u32 },

    #[error("All values must be whole numbers.")]
    NotWhole,

    #[error("Stop the running sorts before changing the array.")]
    SortInProgress,
}

/// Errors loading, validating or saving the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid color '{0}', expected #RRGGBB")]
    Color(String),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to write config: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to parse config document: {0}")]
    Document(#[from] toml_edit::TomlError),
}
