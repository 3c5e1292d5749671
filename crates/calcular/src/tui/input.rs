//! Keyboard input handling
//!
//! Calcular: Error prevention - raw key events become typed pad actions
//! before anything reaches the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{key_for_char, Key, Operator};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAction {
    /// Forward a key to the session.
    Press(Key),
    /// Quit the application.
    Quit,
    /// No action (ignored input).
    Noop,
}

/// Input handler that maps key events to pad actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> PadAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => PadAction::Quit,
                _ => PadAction::Noop,
            };
        }

        match code {
            KeyCode::Enter => PadAction::Press(Key::Equals),
            KeyCode::Backspace => PadAction::Press(Key::Delete),
            KeyCode::Esc => PadAction::Press(Key::Clear),
            KeyCode::Char('q') => PadAction::Quit,
            // Multiply convenience next to the digit keys.
            KeyCode::Char('x') => PadAction::Press(Key::Op(Operator::Multiply)),
            KeyCode::Char(c) => key_for_char(c).map_or(PadAction::Noop, PadAction::Press),
            _ => PadAction::Noop,
        }
    }
}
