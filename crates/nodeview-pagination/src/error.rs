use std::fmt;
use thiserror::Error;

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginationError>;

/// Why a requested page size was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSizeProblem {
    Missing,
    NotANumber,
    Zero,
    TooLarge { max: usize },
}

impl fmt::Display for PageSizeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSizeProblem::Missing => write!(f, "size is required"),
            PageSizeProblem::NotANumber => write!(f, "size must be a positive integer"),
            PageSizeProblem::Zero => write!(f, "size must be at least 1"),
            PageSizeProblem::TooLarge { max } => write!(f, "size must not exceed {}", max),
        }
    }
}

/// Consumer-side failures while reading a paginated response
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not a page document holding the expected item type
    #[error("response body does not match the expected page shape: {0}")]
    Body(#[from] serde_json::Error),

    /// A navigation link does not carry a usable offset and size
    #[error("invalid page link '{href}': {reason}")]
    Link { href: String, reason: String },

    /// `Link` header is not in `<href>; rel="..."` form
    #[error("malformed Link header: {0}")]
    Header(String),
}

fn quoted_suffix(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(|v| format!(" '{}'", v))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum PaginationError {
    /// Client asked for a missing, non-numeric, zero or oversized page
    #[error("Invalid page size{}: {problem}", quoted_suffix(.value))]
    InvalidPageSize {
        value: Option<String>,
        problem: PageSizeProblem,
    },

    /// Base reference for building links could not be parsed
    #[error("Invalid link base '{base}': {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to decode paginated response: {0}")]
    Decode(#[from] DecodeError),
}

impl PaginationError {
    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaginationError::InvalidPageSize { .. })
    }

    /// Status code an HTTP boundary should answer with.
    ///
    /// Bad page sizes are unprocessable input (422), not server faults. A
    /// response that cannot be decoded came from a bad upstream (502).
    pub fn http_status(&self) -> u16 {
        match self {
            PaginationError::InvalidPageSize { .. } => 422,
            PaginationError::InvalidBase { .. } => 500,
            PaginationError::Decode(_) => 502,
        }
    }
}

impl From<serde_json::Error> for PaginationError {
    fn from(err: serde_json::Error) -> Self {
        PaginationError::Decode(DecodeError::Body(err))
    }
}
