//! Probe command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Emit one log line per severity level and exit.
///
/// Which lines actually reach stderr depends on the active filter, so
/// the command doubles as a quick check of the -v and -q flags.
pub fn execute_probe(_config: &CliConfig) -> CliResult<()> {
    tracing::trace!(target: "probe", "this is trace");
    tracing::debug!(target: "probe", "this is debug");
    tracing::info!(target: "probe", "this is info");
    tracing::warn!(target: "probe", "this is warning");
    tracing::error!(target: "probe", "this is error");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_succeeds() {
        let config = CliConfig::new();
        assert!(execute_probe(&config).is_ok());
    }
}
