use thiserror::Error;

/// Result type for nodeview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building domain values
#[derive(Debug, Error)]
pub enum Error {
    /// Bridge or task name is empty or contains unsupported characters
    #[error("Invalid bridge name '{0}': only letters, digits, '-' and '_' are allowed")]
    InvalidBridgeName(String),

    /// Bridge URL could not be parsed
    #[error("Invalid bridge URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
