use thiserror::Error;

/// Errors originating from the gallery controllers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown thumbnail size token: {0:?}")]
    UnknownSize(String),

    #[error("invalid scroll offset: {0:?}")]
    InvalidScrollOffset(String),

    #[error("malformed page config: {0}")]
    BadConfig(#[from] serde_json::Error),
}
