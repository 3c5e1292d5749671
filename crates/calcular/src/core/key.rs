//! Typed keypad events
//!
//! Every press reaching the engine is one of these variants, so the
//! session can match exhaustively instead of sniffing raw characters.

/// Binary arithmetic operator selected from the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
}

impl Operator {
    /// Returns the canonical display symbol for this operator.
    ///
    /// The display buffer always carries these symbols, even when the
    /// operator was entered through an ASCII alias such as `*` or `/`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parses an operator from a keypad character.
    ///
    /// Accepts the canonical symbols plus common aliases: `−` (minus
    /// sign) for subtraction, `*` for multiplication, `/` for division.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// Returns true for division, which never takes the integer
    /// formatting path.
    #[must_use]
    pub const fn is_division(self) -> bool {
        matches!(self, Self::Divide)
    }
}

/// A single keypad event.
///
/// The session consumes these one at a time; see
/// [`Session::press`](crate::core::Session::press).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key, `0` through `9`.
    Digit(u8),
    /// The decimal point key.
    Point,
    /// One of the four operator keys.
    Op(Operator),
    /// Backspace: removes the most recent character.
    Delete,
    /// Clears the whole session.
    Clear,
    /// Requests evaluation of the buffered expression.
    Equals,
}

impl Key {
    /// Builds a digit key, rejecting values above 9.
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self::Digit(value))
        } else {
            None
        }
    }

    /// Returns the character this key appends to the display, if any.
    ///
    /// Control keys (delete, clear, equals) return `None`; operators
    /// return their canonical symbol without the surrounding spaces.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Point => Some('.'),
            Self::Op(op) => Some(op.symbol()),
            Self::Delete | Self::Clear | Self::Equals => None,
        }
    }
}
