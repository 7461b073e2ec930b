use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::types::LogLevel;

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// `RUST_LOG`-style directives, falling back to `level` when `directives`
/// is empty or unparseable.
fn filter(level: LogLevel, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .parse_lossy(directives)
}

/// Install the global subscriber. Diagnostics go to stderr so stdout stays
/// clean for rendered output. `RUST_LOG`, when set, overrides `--log-level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: LogLevel) {
    let directives = std::env::var("RUST_LOG").unwrap_or_default();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level, &directives))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
