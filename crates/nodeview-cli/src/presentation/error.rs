use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Table output was asked for a value it has no layout for
    #[error("cannot render {type_name} as a table; use --format json")]
    UnsupportedShape { type_name: &'static str },

    /// Destination rejected a write (e.g. broken pipe)
    #[error("failed to write output: {0}")]
    Sink(#[from] io::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl RenderError {
    pub fn unsupported<T: ?Sized>() -> Self {
        RenderError::UnsupportedShape {
            type_name: std::any::type_name::<T>(),
        }
    }
}
