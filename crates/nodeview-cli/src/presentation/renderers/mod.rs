mod json;
mod output;
mod table;
mod traits;

pub use json::JsonRenderer;
pub use output::{OutputRenderer, RenderFormat, renderer_for};
pub use table::TableRenderer;
pub use traits::Renderer;
