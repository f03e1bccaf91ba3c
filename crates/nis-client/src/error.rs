#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("encode request payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("client is closed")]
    Closed,

    #[error("start scheduler: {0}")]
    Scheduler(#[source] std::io::Error),
}
