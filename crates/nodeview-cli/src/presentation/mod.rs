//! Output rendering for CLI commands.
//!
//! Command handlers hand their result to a [`Renderer`]: the JSON renderer
//! serializes anything, the table renderer only knows the fixed set of
//! shapes listed in [`Shape`] and refuses everything else.

pub mod error;
pub mod formatters;
pub mod renderers;
pub mod shape;

pub use error::RenderError;
pub use formatters::FormatOptions;
pub use renderers::{
    JsonRenderer, OutputRenderer, RenderFormat, Renderer, TableRenderer, renderer_for,
};
pub use shape::Shape;
