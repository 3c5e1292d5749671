//! Key script parsing
//!
//! Calcular: a session is driven by keys, so a test script is just a
//! string of key characters. `"12+8="` presses six keys.

use thiserror::Error;

use crate::core::key::{Key, Operator};

/// Error raised when a key script contains a character that maps to no key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// A character in the script is not a recognized key.
    #[error("unrecognized key character {ch:?} at position {pos}")]
    UnknownKey {
        /// The offending character.
        ch: char,
        /// Character offset within the script (whitespace included).
        pos: usize,
    },
}

/// Parses a key script into a key sequence.
///
/// Each non-whitespace character maps to one key press. Whitespace is
/// ignored, so `"12 + 8 ="` and `"12+8="` parse to the same keys.
///
/// # Errors
///
/// Returns [`ScriptError::UnknownKey`] for any character that is not a
/// key, with its position in the script.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, ScriptError> {
    let mut keys = Vec::new();
    for (pos, ch) in script.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let key = key_for_char(ch).ok_or(ScriptError::UnknownKey { ch, pos })?;
        keys.push(key);
    }
    Ok(keys)
}

/// Maps a single character to a key, if it names one.
///
/// Digits, `.`, `=`, `c`/`C` for clear and `<` for delete are keys, and
/// any operator alias accepted by [`Operator::from_char`] is too.
#[must_use]
pub fn key_for_char(ch: char) -> Option<Key> {
    match ch {
        '0'..='9' => {
            let digit = u8::try_from(ch.to_digit(10)?).ok()?;
            Key::digit(digit)
        }
        '.' => Some(Key::Point),
        '=' => Some(Key::Equals),
        'c' | 'C' => Some(Key::Clear),
        '<' => Some(Key::Delete),
        _ => Operator::from_char(ch).map(Key::Op),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    // ===== key_for_char tests =====

    #[test]
    fn test_every_digit_char_maps_to_digit_key() {
        for (ch, value) in ('0'..='9').zip(0u8..) {
            assert_eq!(key_for_char(ch), Some(Key::Digit(value)));
        }
    }

    #[test]
    fn test_point_char() {
        assert_eq!(key_for_char('.'), Some(Key::Point));
    }

    #[test]
    fn test_equals_char() {
        assert_eq!(key_for_char('='), Some(Key::Equals));
    }

    #[test]
    fn test_clear_chars() {
        assert_eq!(key_for_char('c'), Some(Key::Clear));
        assert_eq!(key_for_char('C'), Some(Key::Clear));
    }

    #[test]
    fn test_delete_char() {
        assert_eq!(key_for_char('<'), Some(Key::Delete));
    }

    #[test]
    fn test_operator_chars() {
        assert_eq!(key_for_char('+'), Some(Key::Op(Operator::Add)));
        assert_eq!(key_for_char('-'), Some(Key::Op(Operator::Subtract)));
        assert_eq!(key_for_char('×'), Some(Key::Op(Operator::Multiply)));
        assert_eq!(key_for_char('÷'), Some(Key::Op(Operator::Divide)));
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!(key_for_char('*'), Some(Key::Op(Operator::Multiply)));
        assert_eq!(key_for_char('/'), Some(Key::Op(Operator::Divide)));
        assert_eq!(key_for_char('−'), Some(Key::Op(Operator::Subtract)));
    }

    #[test]
    fn test_unknown_chars_map_to_nothing() {
        assert_eq!(key_for_char('%'), None);
        assert_eq!(key_for_char('q'), None);
        assert_eq!(key_for_char('('), None);
    }

    // ===== parse_keys tests =====

    #[test]
    fn test_parse_simple_script() {
        let keys = parse_keys("12+8=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(1),
                Key::Digit(2),
                Key::Op(Operator::Add),
                Key::Digit(8),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let spaced = parse_keys("12 + 8 =").unwrap();
        let tight = parse_keys("12+8=").unwrap();
        assert_eq!(spaced, tight);
    }

    #[test]
    fn test_parse_clear_delete_point() {
        let keys = parse_keys("1.c<").unwrap();
        assert_eq!(
            keys,
            vec![Key::Digit(1), Key::Point, Key::Clear, Key::Delete]
        );
    }

    #[test]
    fn test_parse_empty_script() {
        assert_eq!(parse_keys("").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_whitespace_only_script() {
        assert_eq!(parse_keys("  \t ").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_unknown_char_reports_position() {
        let err = parse_keys("12%8").unwrap_err();
        assert_eq!(err, ScriptError::UnknownKey { ch: '%', pos: 2 });
    }

    #[test]
    fn test_parse_position_counts_chars_not_bytes() {
        // '÷' is multi-byte; the reported position is still a char offset.
        let err = parse_keys("÷q").unwrap_err();
        assert_eq!(err, ScriptError::UnknownKey { ch: 'q', pos: 1 });
    }

    #[test]
    fn test_error_message_names_char_and_position() {
        let err = parse_keys("5#5=").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'#'"));
        assert!(msg.contains("position 1"));
    }

    // ===== Script-to-session bridge =====

    #[test]
    fn test_parsed_script_drives_a_session() {
        let keys = parse_keys("12+8=").unwrap();
        let mut session = Session::new();
        session.feed(keys);
        assert_eq!(session.display(), "20");
    }
}
