use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter '{0}'")]
    Filter(String),

    #[error("a global subscriber is already installed")]
    AlreadyInitialized,
}

/// Installs the global `tracing` subscriber, appending plain-text records to
/// `log_file`. The terminal is owned by the UI, so nothing goes to stdout.
pub fn init_logging(log_file: &Path, filter: &str) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|_| LoggingError::Filter(filter.to_string()))?;

    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::Open {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|source| LoggingError::Open {
            path: log_file.display().to_string(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_bad_filter() {
        let dir = TempDir::new().unwrap();
        let result = init_logging(&dir.path().join("x.log"), "thememorph=notalevel");
        assert!(matches!(result, Err(LoggingError::Filter(_))));
    }

    #[test]
    fn test_unopenable_file() {
        let dir = TempDir::new().unwrap();
        // The log path is an existing directory.
        let result = init_logging(dir.path(), "info");
        assert!(matches!(result, Err(LoggingError::Open { .. })));
    }
}
