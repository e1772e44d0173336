//! Logging setup
//!
//! Logs go to stderr so report output on stdout stays clean. When
//! `LOG_DIR` names an existing directory they go to a daily rolling file
//! there instead.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// File name prefix of the rolling log
const LOG_FILE_PREFIX: &str = "dashboard";

/// Install the global subscriber from the loaded configuration.
///
/// A second call is a no-op.
pub fn init_logger(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config.log_level))
        .with_target(false);

    match log_file_dir(config) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let _ = builder.with_ansi(false).with_writer(appender).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}

/// `LOG_LEVEL` accepts a plain level or full filter directives
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn log_file_dir(config: &Config) -> Option<&Path> {
    let dir = Path::new(config.log_dir.as_deref()?);
    dir.is_dir().then_some(dir)
}
