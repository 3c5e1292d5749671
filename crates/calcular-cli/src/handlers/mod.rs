//! Command handlers
//!
//! Handler functions extracted from main.rs for testability. Each
//! subcommand gets one `execute_*` entry point taking the resolved
//! configuration and its parsed arguments.

pub mod eval;
pub mod probe;
pub mod tui;

pub use eval::execute_eval;
pub use probe::execute_probe;
pub use tui::execute_tui;
