//! CLI error types

use thiserror::Error;

/// Result alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the calculadora binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal or stream I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The eval script contained a character with no key mapping
    #[error("invalid key script: {0}")]
    Script(#[from] calcular::core::ScriptError),

    /// Result serialization failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
