use serde::Serialize;
use std::any::Any;

use crate::presentation::RenderError;

/// Writes a representation of a command result to the renderer's sink.
///
/// Failures are returned, never panicked on; a failed render may have
/// written part of its output.
pub trait Renderer {
    fn render<T>(&mut self, value: &T) -> Result<(), RenderError>
    where
        T: Serialize + Any;
}
