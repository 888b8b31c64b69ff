use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("invalid preview base url: {0}")]
    PreviewBase(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by the platform media primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),

    #[error("media source unavailable: {0}")]
    Source(String),
}
