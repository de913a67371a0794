//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// Quiet defaults are applied to the HTTP stack first, then `RUST_LOG` is read
/// on top of them, then `level` is applied as the global default and for this
/// crate. `RUST_LOG` can therefore turn up other modules (e.g. `reqwest`),
/// while the CLI level always decides what this crate logs.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show the outgoing (redacted) request URL
/// viewdns --log-level debug reverse-ip 8.8.8.8
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=reqwest=debug viewdns dns-record example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let mut builder = logger_builder(level, format, env_filters.as_deref());

    // try_init() so a second initialization is an error rather than a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the logger; `env_filters` uses the `RUST_LOG` directive syntax.
fn logger_builder(
    level: LevelFilter,
    format: LogFormat,
    env_filters: Option<&str>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder.filter_level(level);
    builder.filter_module("viewdns", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_rust_log_can_raise_http_stack_level() {
        let logger = logger_builder(
            LevelFilter::Warn,
            LogFormat::Plain,
            Some("reqwest=debug"),
        )
        .build();
        assert!(enabled(&logger, "reqwest", Level::Debug));
        assert!(!enabled(&logger, "hyper", Level::Debug));
    }

    #[test]
    fn test_http_stack_is_quiet_by_default() {
        let logger = logger_builder(LevelFilter::Trace, LogFormat::Json, None).build();
        assert!(!enabled(&logger, "reqwest", Level::Debug));
        assert!(enabled(&logger, "reqwest", Level::Info));
        assert!(enabled(&logger, "viewdns::client", Level::Trace));
    }

    #[test]
    fn test_cli_level_wins_for_this_crate() {
        let logger = logger_builder(
            LevelFilter::Warn,
            LogFormat::Plain,
            Some("viewdns=trace,debug"),
        )
        .build();
        assert!(!enabled(&logger, "viewdns", Level::Debug));
        assert!(enabled(&logger, "viewdns", Level::Warn));
        assert!(!enabled(&logger, "some_crate", Level::Debug));
    }

    #[test]
    fn test_init_logger_twice_returns_error() {
        // Only one logger can be installed per process; whichever test gets
        // here first wins, so the second call must fail without panicking
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
