//! Calculadora CLI library
//!
//! Command-line front end for the Calcular keypad calculator. The binary
//! exposes three subcommands:
//!
//! - `tui`: interactive keypad in the terminal
//! - `eval`: run a key script non-interactively and print the display
//! - `probe`: emit one log line per severity level
//!
//! The library layer exists so command parsing, configuration and the
//! handlers can be unit tested without spawning the binary.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;

pub mod handlers;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, EvalFormat, TuiArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
