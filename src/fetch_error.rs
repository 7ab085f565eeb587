#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("CWA API key is not configured")]
    MissingApiKey,
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to decode upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True for the configuration failure that must be reported before any
    /// network call is attempted. Everything else is an upstream failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::MissingApiKey)
    }
}
