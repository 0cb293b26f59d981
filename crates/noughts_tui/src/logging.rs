//! Tracing setup.

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::AppConfig;

/// Sends logs to the configured file so they stay off the terminal UI.
///
/// `RUST_LOG` takes precedence over the configured filter. A subscriber
/// that is already installed is left in place.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_log_is_kept() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("noughts.log");
        std::fs::write(&path, "previous session\n").unwrap();

        let config = AppConfig::default().with_log_file(path.clone());
        init_tracing(&config).unwrap();
        init_tracing(&config).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous session\n"), "{}", content);
    }
}
