//! Calculator state and the display buffer.
//!
//! The display buffer is the textual value shown to the user, doubling
//! as the second-operand-in-progress: handlers parse it on demand, and
//! a buffer that no longer reads as a number (repeated decimal points
//! are not rejected, and the error token is an ordinary buffer value)
//! parses as NaN rather than failing.

use core::fmt;

use crate::keys::BinaryOp;

/// Token displayed after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

const EMPTY_DISPLAY: &str = "0";

/// Textual value currently being entered or last computed.
///
/// Never empty; defaults to `"0"`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBuffer(String);

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self(EMPTY_DISPLAY.to_string())
    }
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one digit token.
    ///
    /// The initial `"0"` is replaced by the first digit, except `.`
    /// which keeps the zero (`"0"` then `.` reads `"0."`). Decimal
    /// points are never counted or rejected: `"1.2.3"` is a valid
    /// buffer that simply reads as NaN.
    pub fn push(&mut self, token: char) {
        if self.0 == EMPTY_DISPLAY && token != '.' {
            self.0.clear();
        }
        self.0.push(token);
    }

    /// Drop the trailing character, bottoming out at `"0"`.
    pub fn backspace(&mut self) {
        if self.0.len() > 1 {
            self.0.pop();
        } else {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.0 = EMPTY_DISPLAY.to_string();
    }

    /// Numeric reading of the buffer; NaN when unparsable.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }

    /// Replace the buffer with the canonical decimal form of `value`.
    ///
    /// Integral results carry no trailing point or zeros (`7.0` reads
    /// `"7"`), and shortest-roundtrip artifacts are shown verbatim.
    pub fn set_value(&mut self, value: f64) {
        self.0 = value.to_string();
    }

    /// Replace the buffer with the error token.
    pub fn set_error(&mut self) {
        self.0 = ERROR_DISPLAY.to_string();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First operand and operator of an in-progress binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    pub operand: f64,
    pub op: BinaryOp,
}

/// Transient per-session state, recreated at session start and mutated
/// in place by every handler.
///
/// `pending` keeps the operand and operator together, so the two are
/// present or absent as one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub display: DisplayBuffer,
    pub pending: Option<Pending>,
    /// True while an evaluation request is outstanding.
    pub busy: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }
}
