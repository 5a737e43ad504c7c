use thiserror::Error;

/// Errors raised while talking to the photo API or decoding its images.
///
/// Every variant carries a rendered message instead of the source error so
/// the enum stays `Clone` and can travel inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Transport failure or a non-2xx response
    #[error("request failed: {0}")]
    Request(String),
    /// The list payload was not the expected JSON
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Downloaded bytes could not be decoded as an image
    #[error("image decode failed: {0}")]
    Image(String),
    /// A blocking task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(String),
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Self::Request(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

impl From<tokio::sync::AcquireError> for Error {
    fn from(err: tokio::sync::AcquireError) -> Self {
        Self::Task(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
