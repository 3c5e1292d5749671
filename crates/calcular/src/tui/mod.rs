//! Terminal front end for the calculator engine
//!
//! Calcular: thin adapter - buttons and keystrokes become typed keys, and
//! the session's display string is rendered straight back.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::KeypadApp;
pub use input::{InputHandler, PadAction};
pub use keypad::{Keypad, KeypadWidget, PadButton};
pub use ui::{render, screen_areas, CalcScreen, ScreenAreas};
