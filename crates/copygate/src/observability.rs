//! Logging and tracing initialization.
//!
//! Events go to a JSONL log file via a non-blocking appender; the console
//! stays reserved for command output. The returned guard must live for the
//! duration of the process or buffered log lines are lost.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name within the log directory.
const LOG_FILE_NAME: &str = "copygate.jsonl";

/// Where log output should go.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`COPYGATE_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Log directory (`COPYGATE_LOG_DIR`, then config `log_dir`, then the
    /// platform cache directory).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with config-file values as fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("COPYGATE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("COPYGATE_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the env filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, `-v` maps
/// to `debug`, `-vv` and beyond to `trace`, and the config level is the
/// default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize JSONL file logging.
///
/// Returns the appender guard; dropping it flushes and stops the writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<WorkerGuard> {
    let (dir, file_name) = resolve_log_target(config);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(writer))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

/// Resolve the log directory and file name from the config.
fn resolve_log_target(config: &ObservabilityConfig) -> (PathBuf, String) {
    if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let file_name = path
            .file_name()
            .map_or_else(|| LOG_FILE_NAME.to_string(), |n| n.to_string_lossy().into_owned());
        return (dir, file_name);
    }

    // Last resort is the system temp dir, so logging never blocks a command.
    let dir = config
        .log_dir
        .clone()
        .or_else(default_log_dir)
        .unwrap_or_else(std::env::temp_dir);
    (dir, LOG_FILE_NAME.to_string())
}

/// Platform cache directory for logs (`~/.cache/copygate/logs` on Linux).
fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "copygate")
        .map(|dirs| dirs.cache_dir().join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_forces_error_level() {
        let filter = env_filter(true, 3, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(env_filter(false, 0, "warn").to_string(), "warn");
        assert_eq!(env_filter(false, 1, "warn").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "warn").to_string(), "trace");
    }

    #[test]
    fn explicit_log_path_splits_into_dir_and_file() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/tmp/copygate/run.jsonl")),
            log_dir: None,
        };
        let (dir, file) = resolve_log_target(&config);
        assert_eq!(dir, PathBuf::from("/tmp/copygate"));
        assert_eq!(file, "run.jsonl");
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        let (dir, file) = resolve_log_target(&config);
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(file, LOG_FILE_NAME);
    }
}
