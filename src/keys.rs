//! # Input Event Vocabulary
//!
//! Every interaction with the calculator is one of a closed set of key
//! events: digit tokens, the four binary operators, equals, clear and
//! backspace. UI layers construct [`Key`] values (typically from a
//! keypad legend character) and hand them to the engine's single
//! dispatch point; nothing else crosses the boundary.
//!
//! Digit tokens are validated here, at construction, so the handlers
//! downstream never re-check them.

use thiserror::Error;

/// The four binary operators of the keypad.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, PartialOrd, Ord,
)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    /// One character in `0-9` or `.`, appended to the display buffer.
    Digit(char),
    /// Captures (or chains) a binary operation.
    Operator(BinaryOp),
    Equals,
    Clear,
    Backspace,
}

#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("Unknown key: {0:?}")]
    Unknown(char),
}

impl TryFrom<char> for Key {
    type Error = KeyError;

    /// Map a keypad legend character to its key event. `c`/`C` clear,
    /// U+0008 is backspace.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' | '.' => Ok(Key::Digit(c)),
            '+' => Ok(Key::Operator(BinaryOp::Add)),
            '-' => Ok(Key::Operator(BinaryOp::Subtract)),
            '*' => Ok(Key::Operator(BinaryOp::Multiply)),
            '/' => Ok(Key::Operator(BinaryOp::Divide)),
            '=' => Ok(Key::Equals),
            'c' | 'C' => Ok(Key::Clear),
            '\u{8}' => Ok(Key::Backspace),
            other => Err(KeyError::Unknown(other)),
        }
    }
}
