pub mod options;
pub mod text;
pub mod time;

pub use options::FormatOptions;
