use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("empty queue")]
    EmptyQueue,
    #[error("parsing error")]
    Parse,
    #[error("profile store error: {0}")]
    Store(String),
    #[error("filter task failed: {0}")]
    Join(String),
    #[error("filter pass timed out")]
    Timeout,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for MatchError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

impl From<chrono::ParseError> for MatchError {
    fn from(_: chrono::ParseError) -> Self {
        Self::Parse
    }
}

impl From<tokio::task::JoinError> for MatchError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Join(e.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for MatchError {
    fn from(e: Box<dyn std::error::Error>) -> Self {
        Self::Other(anyhow::anyhow!(e.to_string()))
    }
}
