//! Tracing setup.
//!
//! The UI owns the terminal, so logs never go to stdout or stderr. They are
//! written to a file when one is configured and dropped otherwise.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install a subscriber writing to `path`. Does nothing when `path` is `None`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre::eyre!("failed to install log subscriber: {err}"))?;

    tracing::info!(path = %path.display(), "logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(init(None).is_ok());
        assert!(!tracing::dispatcher::has_been_set());
    }
}
