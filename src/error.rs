#[derive(Debug, thiserror::Error)]
pub enum YugiohPricesError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Service error ({status}): {message}")]
    Service { status: String, message: String },

    #[error("Card not found: {0}")]
    NotFound(String),

    #[error("No price listings for: {0}")]
    EmptyResult(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl YugiohPricesError {
    /// True if the service answered successfully but had no such card.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True if the service answered successfully with zero price listings.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult(_))
    }
}

pub type Result<T> = std::result::Result<T, YugiohPricesError>;
