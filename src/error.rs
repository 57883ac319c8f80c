// Error types shared by the client, configuration and viewer layers

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The endpoint answered with a non-success HTTP status
    #[error("request failed with status: {status}")]
    Request { status: u16 },
    /// The payload decoded but did not have the expected shape
    #[error("unexpected payload format: {0}")]
    Format(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("no API key available, cannot fetch bodies")]
    MissingCredential,
    #[error("required element `{0}` is missing")]
    MissingElement(&'static str),
    #[error("failed to access config file: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to write config file: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ViewerError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
