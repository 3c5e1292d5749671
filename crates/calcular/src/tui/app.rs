//! Application state for the terminal calculator
//!
//! Calcular: Error prevention - all input funnels into typed keys before
//! it can touch the session.

use crate::core::{Key, Notice, Phase, Session};
use crate::tui::keypad::Keypad;

/// Terminal application state: the engine session plus keypad visuals.
#[derive(Debug, Clone, Default)]
pub struct KeypadApp {
    /// The calculator engine.
    session: Session,
    /// On-screen keypad with pressed-state highlights.
    keypad: Keypad,
    /// Advisory from the most recent key press, if any.
    notice: Option<Notice>,
    /// Whether the app should quit.
    should_quit: bool,
}

impl KeypadApp {
    /// Creates the app with an empty session and an unpressed keypad.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one key to the session, updating highlight and advisory.
    ///
    /// The advisory is transient: it reflects only the latest press.
    pub fn press(&mut self, key: Key) {
        self.keypad.highlight_key(key);
        self.notice = self.session.press(key);
    }

    /// Presses the keypad button at `index` (the mouse click path).
    pub fn press_button(&mut self, index: usize) {
        if let Some(key) = self.keypad.get_button(index).map(|b| b.key) {
            self.press(key);
        }
    }

    /// Releases all button highlights.
    pub fn release_buttons(&mut self) {
        self.keypad.release_all();
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.session.display()
    }

    /// Returns the session phase for the status line.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Returns the advisory from the most recent press, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Returns the keypad for rendering and hit-testing.
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}
