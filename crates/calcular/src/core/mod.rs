//! Core calculator state
//!
//! Calcular: the calculator is a plain value. Everything here works
//! without a terminal, a clock or a thread.

pub mod key;
pub mod script;
pub mod session;

pub use key::{Key, Operator};
pub use script::{key_for_char, parse_keys, ScriptError};
pub use session::Session;

use serde::Serialize;
use std::fmt;

/// Where the session currently is, derived from its state.
///
/// The phase is never stored; it is read off the buffer and the
/// result flag whenever someone asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Nothing typed yet.
    Empty,
    /// Typing the first operand.
    FirstOperand,
    /// An operator has been chosen; typing the second operand.
    SecondOperand,
    /// The display holds a computed result.
    ResultShown,
}

impl Phase {
    /// Short human-readable label for status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::FirstOperand => "first operand",
            Self::SecondOperand => "second operand",
            Self::ResultShown => "result",
        }
    }
}

/// Advisory raised by an evaluation that could not proceed normally.
///
/// Advisories are informational. The session always lands in a valid
/// state whether or not the caller surfaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notice {
    /// The second operand of a division was zero.
    DivisionByZero,
    /// Equals was pressed with an operator but no second operand.
    NothingToCompute,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "cannot divide by zero"),
            Self::NothingToCompute => write!(f, "nothing to compute"),
        }
    }
}
