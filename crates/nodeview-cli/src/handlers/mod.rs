mod context;

pub mod bridge;
pub mod job;
pub mod page;

pub use context::HandlerContext;
