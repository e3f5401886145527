#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport could not reach the provider (connect, timeout, request build).
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not JSON, or the payload lacked an expected field.
    #[error("parse error: {0}")]
    Parse(String),

    /// Ordering was requested on a vacancy with no salary figure.
    #[error("cannot compare: {0}")]
    Comparison(String),

    /// The output destination could not be written or read.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl AppError {
    /// Classify a reqwest failure. Body-decode problems are parse errors,
    /// everything transport-shaped is a network error.
    pub fn from_http(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }

    /// True for the transport-class failures SuperJob recovers from locally.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}
