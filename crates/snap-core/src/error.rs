use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapError {
    #[error("Degenerate input: {0}")]
    Degenerate(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SnapError {
    fn from(err: serde_json::Error) -> Self {
        SnapError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnapError>;
