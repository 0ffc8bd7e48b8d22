//! Logger installation for the command-line tool
//!
//! Library code only emits records through the `log` facade; the binary decides
//! where they go.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle, WriteMode};

/// Log specification used when nothing else is requested
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log specification used with `--quiet`
pub const QUIET_LOG_LEVEL: &str = "error";

/// Pick the log specification from the command-line switches
pub fn log_spec(quiet: bool, requested: Option<&str>) -> &str {
    match (quiet, requested) {
        (true, _) => QUIET_LOG_LEVEL,
        (false, Some(spec)) => spec,
        (false, None) => DEFAULT_LOG_LEVEL,
    }
}

/// Start logging to stderr, `RUST_LOG` overrides `spec`
///
/// The returned handle must be kept alive for the duration of the program.
///
/// # Errors
///
/// Returns an error if the specification cannot be parsed or a logger is
/// already installed
pub fn setup_logging(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(spec)?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .start()
}
