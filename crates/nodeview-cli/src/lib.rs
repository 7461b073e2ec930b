mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod store;
pub mod types;

pub use args::{BridgeCommand, Cli, Commands, JobCommand, PageArgs, PageCommand};
pub use commands::run;
