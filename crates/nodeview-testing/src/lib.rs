//! Testing infrastructure for nodeview tests.
//!
//! - `fixtures`: ready-made bridges, jobs and runs
//! - `sinks`: `io::Write` doubles for renderer tests
//! - `TestWorld`: isolated data directory plus CLI command setup

pub mod fixtures;
pub mod sinks;
pub mod world;

pub use world::{CliResult, TestWorld};
