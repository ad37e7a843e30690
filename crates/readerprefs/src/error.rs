use thiserror::Error;

/// Errors raised at the fallible edges of the crate: loading screen
/// definitions and configuration, or turning user input into values.
///
/// The decoration engine itself never fails. Missing nodes, unknown
/// enumerants and rejected changes all degrade to a defined default.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Screen parse error: {0}")]
    ScreenParse(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Duplicate preference key: {0}")]
    DuplicateKey(String),

    #[error("Invalid preference '{key}': {reason}")]
    InvalidPreference { key: String, reason: String },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Unknown preference key: {0}")]
    UnknownKey(String),

    #[error("Unknown settings group: {0}")]
    UnknownGroup(String),
}

pub type Result<T> = std::result::Result<T, PrefsError>;
