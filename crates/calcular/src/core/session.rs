//! Calculator session state machine
//!
//! Calcular: the whole calculator is one plain value - a display buffer
//! and a result flag - driven by typed key events. No UI types in sight.

use crate::core::key::{Key, Operator};
use crate::core::{Notice, Phase};

/// A calculator session: the display buffer plus the result-shown flag.
///
/// Every key event goes through [`press`](Self::press), which mutates the
/// buffer and may hand back an advisory [`Notice`]. The buffer holds at
/// most one pending binary expression, `<operand1> <op> <operand2>`, with
/// the operator bracketed by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    buffer: String,
    result_shown: bool,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// Returns true when the buffer holds a just-computed result.
    ///
    /// While set, the next digit, point, or operator discards the buffer
    /// instead of appending, and delete clears instead of popping.
    #[must_use]
    pub const fn result_shown(&self) -> bool {
        self.result_shown
    }

    /// Returns the observable phase, derived from buffer and flag.
    ///
    /// The flag wins: a session that just produced a result reports
    /// [`Phase::ResultShown`] even when the result is the empty string.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.result_shown {
            Phase::ResultShown
        } else if self.buffer.is_empty() {
            Phase::Empty
        } else if self.buffer.contains(' ') {
            Phase::SecondOperand
        } else {
            Phase::FirstOperand
        }
    }

    /// Applies one key event and returns the advisory it produced, if any.
    pub fn press(&mut self, key: Key) -> Option<Notice> {
        match key {
            Key::Digit(_) | Key::Point => {
                self.take_result();
                // Out-of-range digit values have no character and append
                // nothing.
                if let Some(c) = key.to_char() {
                    self.buffer.push(c);
                }
                None
            }
            Key::Op(op) => {
                self.take_result();
                self.buffer.push(' ');
                self.buffer.push(op.symbol());
                self.buffer.push(' ');
                None
            }
            Key::Delete => {
                if self.result_shown {
                    self.reset();
                } else {
                    self.buffer.pop();
                }
                None
            }
            Key::Clear => {
                self.reset();
                None
            }
            Key::Equals => self.evaluate(),
        }
    }

    /// Applies a sequence of keys, collecting every advisory produced.
    pub fn feed<I>(&mut self, keys: I) -> Vec<Notice>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter().filter_map(|key| self.press(key)).collect()
    }

    /// A shown result is consumed by the next entry: the buffer starts
    /// fresh instead of extending the result.
    fn take_result(&mut self) {
        if self.result_shown {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.result_shown = false;
    }

    /// Evaluates the buffered expression in place.
    ///
    /// Incomplete input (no operator bracket yet) is left untouched; the
    /// output paths replace the buffer and set the result flag.
    fn evaluate(&mut self) -> Option<Notice> {
        if self.buffer.is_empty() {
            return None;
        }
        // No operator entered yet.
        if !self.buffer.contains(' ') {
            return None;
        }
        // Equals pressed twice with nothing new typed.
        if self.result_shown {
            self.result_shown = false;
            return None;
        }
        let Some((lhs, op, rhs)) = split_expression(&self.buffer) else {
            // A space without a full operator bracket (reachable via
            // delete) is incomplete input, not an error.
            return None;
        };
        match (lhs.is_empty(), rhs.is_empty()) {
            (false, false) => {
                let (first, second) = (lhs.parse::<f64>(), rhs.parse::<f64>());
                debug_assert!(
                    first.is_ok() && second.is_ok(),
                    "keypad input left unparsable operand in {:?}",
                    self.buffer
                );
                let (Ok(a), Ok(b)) = (first, second) else {
                    return None;
                };
                if op.is_division() && b == 0.0 {
                    self.buffer = String::from("0");
                    self.result_shown = true;
                    return Some(Notice::DivisionByZero);
                }
                let integral =
                    !lhs.contains('.') && !rhs.contains('.') && !op.is_division();
                self.buffer = render_value(op.apply(a, b), integral);
                self.result_shown = true;
                None
            }
            (false, true) => {
                let parsed = lhs.parse::<f64>();
                debug_assert!(
                    parsed.is_ok(),
                    "keypad input left unparsable operand in {:?}",
                    self.buffer
                );
                let Ok(value) = parsed else {
                    return None;
                };
                self.buffer = value.to_string();
                self.result_shown = true;
                Some(Notice::NothingToCompute)
            }
            (true, false) => {
                let parsed = rhs.parse::<f64>();
                debug_assert!(
                    parsed.is_ok(),
                    "keypad input left unparsable operand in {:?}",
                    self.buffer
                );
                let Ok(value) = parsed else {
                    return None;
                };
                // Missing first operand counts as zero for addition and
                // subtraction; multiplication and division yield zero
                // outright (a defined quirk, not an error).
                let result = match op {
                    Operator::Add | Operator::Subtract => op.apply(0.0, value),
                    Operator::Multiply | Operator::Divide => 0.0,
                };
                self.buffer = render_value(result, !rhs.contains('.'));
                self.result_shown = true;
                None
            }
            (true, true) => {
                self.buffer.clear();
                self.result_shown = true;
                None
            }
        }
    }
}

/// Splits `<operand1> <op> <operand2>` at the first space.
///
/// Character-aware rather than byte-aware: `×` and `÷` are multi-byte.
/// Returns `None` when the text after the first space is not a full
/// operator bracket.
fn split_expression(buffer: &str) -> Option<(&str, Operator, &str)> {
    let (lhs, rest) = buffer.split_once(' ')?;
    let mut chars = rest.chars();
    let op = Operator::from_char(chars.next()?)?;
    if chars.next() != Some(' ') {
        return None;
    }
    Some((lhs, op, chars.as_str()))
}

/// Renders a result: truncated toward zero when both operand texts were
/// integral (and the operator was not division), f64 display form otherwise.
fn render_value(value: f64, integral: bool) -> String {
    if integral {
        let truncated = value as i64;
        truncated.to_string()
    } else {
        value.to_string()
    }
}
