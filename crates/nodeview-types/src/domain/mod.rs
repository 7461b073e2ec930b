mod bridge;
mod job;
mod run;

pub use bridge::*;
pub use job::*;
pub use run::*;
