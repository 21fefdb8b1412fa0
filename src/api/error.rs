use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat endpoint error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("reply is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("reply has no message")]
    MissingMessage,

    #[error("no reply within {0:?}")]
    TimedOut(Duration),
}

pub type ChatResult<T> = Result<T, ExchangeError>;
