use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsetError {
    #[error("Invalid input: category set is empty")]
    EmptyCategories,

    #[error("Invalid input: indentation must not be negative, got {value}")]
    NegativeIndentation { value: i64 },

    #[error("Invalid input: indentation {value} exceeds the maximum of {max}")]
    IndentationTooLarge { value: i64, max: usize },

    #[error("Invalid width: {value} - must be at least 1")]
    InvalidWidth { value: i64 },

    #[error("Unknown category set: {name}")]
    UnknownSet { name: String },

    #[error("Template syntax error at byte {offset}: {message}")]
    TemplateSyntax { offset: usize, message: String },

    #[error("No binding for template placeholder: {{{name}}}")]
    MissingBinding { name: String },

    #[error("Invalid binding '{spec}' - expected PLACEHOLDER=SET")]
    InvalidBinding { spec: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocsetError>;

impl DocsetError {
    /// Errors caused by the caller handing in an unusable category set or indentation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyCategories
                | Self::NegativeIndentation { .. }
                | Self::IndentationTooLarge { .. }
                | Self::InvalidWidth { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyCategories
            | Self::NegativeIndentation { .. }
            | Self::IndentationTooLarge { .. }
            | Self::InvalidWidth { .. } => 2,
            Self::UnknownSet { .. } => 3,
            Self::TemplateSyntax { .. }
            | Self::MissingBinding { .. }
            | Self::InvalidBinding { .. } => 4,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 5,
            _ => 1,
        }
    }
}
