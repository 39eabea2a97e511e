use thiserror::Error;

/// mime 統一エラー型
#[derive(Debug, Error)]
pub enum MimeError {
    #[error("Invalid MIME type '{identifier}': {reason}")]
    InvalidMimeType { identifier: String, reason: String },

    #[error("MIME type {0} is already installed")]
    AlreadyInstalled(String),

    #[error("MIME type {0} is not installed")]
    NotInstalled(String),

    #[error("Cannot open resources from {path}: {reason}")]
    InvalidResource { path: String, reason: String },

    #[error("Missing mandatory resource {field} in {path}")]
    MissingField { field: &'static str, path: String },

    #[error("Malformed resource {field}: {reason}")]
    MalformedField { field: &'static str, reason: String },

    #[error("MIME database error: {0}")]
    Database(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Resource archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, MimeError>;
