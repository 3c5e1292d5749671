//! Calcular: Keypad Calculator Engine
//!
//! A four-function calculator modelled as a state machine. The whole
//! calculator is one value: a display buffer plus a result flag. Keys
//! go in, the buffer changes, advisories come out.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   CALCULAR Architecture                   │
//! ├──────────────────────────────────────────────────────────┤
//! │   ┌──────────┐      ┌───────────┐      ┌──────────────┐  │
//! │   │ Key      │      │ Session   │      │ Front end    │  │
//! │   │ (enum)   │─────►│ (buffer + │─────►│ (TUI widget, │  │
//! │   │          │      │  flag)    │      │  CLI, tests) │  │
//! │   └──────────┘      └───────────┘      └──────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use calcular::core::{parse_keys, Session};
//!
//! let mut session = Session::new();
//! for key in parse_keys("12+8=").unwrap() {
//!     session.press(key);
//! }
//! assert_eq!(session.display(), "20");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

/// Session state machine, key events and script parsing.
pub mod core;

/// Terminal front end (ratatui widgets and event plumbing).
#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::{
    key_for_char, parse_keys, Key, Notice, Operator, Phase, ScriptError, Session,
};
#[cfg(feature = "tui")]
pub use crate::tui::{
    render, screen_areas, CalcScreen, InputHandler, Keypad, KeypadApp, KeypadWidget, PadAction,
    PadButton, ScreenAreas,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::core::{
        key_for_char, parse_keys, Key, Notice, Operator, Phase, ScriptError, Session,
    };
    #[cfg(feature = "tui")]
    pub use super::tui::{InputHandler, Keypad, KeypadApp, PadAction};
}
