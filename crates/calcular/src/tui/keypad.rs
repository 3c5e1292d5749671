//! On-screen keypad for the terminal calculator
//!
//! Calcular: Visual feedback - every button carries the typed key it
//! emits, so clicking and keyboard entry go through the same channel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Key, Operator};

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadButton {
    /// The glyph drawn on the button.
    pub label: char,
    /// Whether the button is currently pressed/highlighted.
    pub pressed: bool,
    /// The key this button emits.
    pub key: Key,
}

impl PadButton {
    const fn new(label: char, key: Key) -> Self {
        Self {
            label,
            pressed: false,
            key,
        }
    }

    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        let label = char::from_digit(u32::from(d), 10).unwrap_or('?');
        Self::new(label, Key::Digit(d))
    }

    /// Creates an operator button labeled with the canonical glyph.
    #[must_use]
    pub const fn operator(op: Operator) -> Self {
        Self::new(op.symbol(), Key::Op(op))
    }

    /// Creates the decimal point button.
    #[must_use]
    pub const fn point() -> Self {
        Self::new('.', Key::Point)
    }

    /// Creates the equals button.
    #[must_use]
    pub const fn equals() -> Self {
        Self::new('=', Key::Equals)
    }

    /// Creates the clear button.
    #[must_use]
    pub const fn clear() -> Self {
        Self::new('C', Key::Clear)
    }

    /// Creates the delete (backspace) button.
    #[must_use]
    pub const fn delete() -> Self {
        Self::new('⌫', Key::Delete)
    }

    /// Sets the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 4-column grid with a short last row
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ] [ ⌫ ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order; the last row is partial.
    buttons: Vec<PadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: 7 8 9 ÷
            PadButton::digit(7),
            PadButton::digit(8),
            PadButton::digit(9),
            PadButton::operator(Operator::Divide),
            // Row 2: 4 5 6 ×
            PadButton::digit(4),
            PadButton::digit(5),
            PadButton::digit(6),
            PadButton::operator(Operator::Multiply),
            // Row 3: 1 2 3 -
            PadButton::digit(1),
            PadButton::digit(2),
            PadButton::digit(3),
            PadButton::operator(Operator::Subtract),
            // Row 4: 0 . = +
            PadButton::digit(0),
            PadButton::point(),
            PadButton::equals(),
            PadButton::operator(Operator::Add),
            // Row 5: C ⌫
            PadButton::clear(),
            PadButton::delete(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&PadButton> {
        self.buttons.get(index)
    }

    /// Gets a mutable button by index.
    pub fn get_button_mut(&mut self, index: usize) -> Option<&mut PadButton> {
        self.buttons.get_mut(index)
    }

    /// Gets a button by row and column; empty grid cells return `None`.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&PadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns the key emitted by the button at a grid position.
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<Key> {
        self.get_button_at(row, col).map(|b| b.key)
    }

    /// Finds the index of the button emitting `key`.
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Sets a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button emitting `key`, releasing every other button.
    pub fn highlight_key(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_button_by_key(key) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &PadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &PadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            let index = row * self.cols + col;
            // The last row is partial; clicks on empty cells miss.
            if index < self.buttons.len() {
                return Some(index);
            }
        }
        None
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.key {
                    Key::Digit(_) | Key::Point => Style::default().fg(Color::White),
                    Key::Op(_) => Style::default().fg(Color::Yellow),
                    Key::Equals => Style::default().fg(Color::Green),
                    Key::Clear | Key::Delete => Style::default().fg(Color::Red),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                // Center by character count; ÷ × ⌫ are multi-byte.
                let label_width = label.chars().count() as u16;
                let label_x = x + (btn_width.saturating_sub(label_width)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
