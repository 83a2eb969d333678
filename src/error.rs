use thiserror::Error;

/// Errors produced while auditing services and writing the report
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
