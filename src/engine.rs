//! # Calculator Engine
//!
//! Turns the serialized stream of key events into display updates.
//! The engine is a small state machine over [`CalculatorState`]:
//!
//! ```text
//!          digit/clear/backspace
//!               ┌─────┐
//!               ▼     │
//!           ┌─────────┴─┐  operator   ┌───────────┐
//!           │   Idle    │────────────▶│ PendingOp │
//!           └───────────┘             └─────┬─────┘
//!               ▲                           │ equals
//!               │        resolved           ▼
//!               │  (result or "Error")┌────────────┐
//!               └─────────────────────│ Evaluating │
//!                                     └────────────┘
//! ```
//!
//! Pressing an operator while one is already pending resolves the
//! pending operation first, so chained input evaluates left to right
//! rather than by precedence. The evaluation itself is delegated to
//! the [`Evaluator`] capability; its faults are converted into the
//! `"Error"` display state here and never reach the caller.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    evaluator::Evaluator,
    keys::{BinaryOp, Key},
    state::{CalculatorState, Pending},
};

pub struct CalculatorEngine {
    state: CalculatorState,
    evaluator: Arc<dyn Evaluator>,
}

impl CalculatorEngine {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            state: CalculatorState::new(),
            evaluator,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display.as_str()
    }

    /// Dispatch a single key press and return the resulting display.
    ///
    /// Operator and equals keys are ignored while an evaluation is
    /// outstanding; digits, clear and backspace stay live.
    #[instrument(level = "debug", skip(self))]
    pub async fn handle_key(&mut self, key: Key) -> &str {
        if self.state.busy && matches!(key, Key::Operator(_) | Key::Equals) {
            debug!(?key, "evaluation outstanding, key ignored");
            return self.display();
        }
        match key {
            Key::Digit(token) => self.input_digit(token),
            Key::Operator(op) => self.input_operator(op).await,
            Key::Equals => self.equals().await,
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
        }
    }

    /// Append a digit token to the display buffer. No failure modes.
    pub fn input_digit(&mut self, token: char) -> &str {
        self.state.display.push(token);
        self.display()
    }

    /// Capture the first operand and operator of a binary operation.
    ///
    /// A pending operation is resolved first — success or failure
    /// alike — and its result becomes the new first operand, so
    /// `3 + 4 *` carries `7` into the multiplication.
    pub async fn input_operator(&mut self, op: BinaryOp) -> &str {
        if self.state.pending.is_some() {
            self.equals().await;
        }
        let operand = self.state.display.value();
        self.state.pending = Some(Pending { operand, op });
        self.state.display.reset();
        self.display()
    }

    /// Resolve the pending operation against the current display value.
    ///
    /// A no-op when nothing is pending. Evaluator faults of any kind
    /// surface as the single `"Error"` display state; the pending
    /// operation is discarded either way, never retried.
    pub async fn equals(&mut self) -> &str {
        let Some(Pending { operand, op }) = self.state.pending else {
            return self.display();
        };
        let second = self.state.display.value();
        self.state.busy = true;
        debug!(%op, operand, second, "evaluating");
        let outcome = self.evaluator.evaluate(op, operand, second).await;
        self.state.pending = None;
        self.state.busy = false;
        match outcome {
            Ok(value) => self.state.display.set_value(value),
            Err(e) => {
                warn!(evaluator = self.evaluator.name(), error = %e, "evaluation failed");
                self.state.display.set_error();
            }
        }
        self.display()
    }

    /// Reset the display and drop any pending operation.
    ///
    /// An in-flight evaluation is not cancelled and `busy` is left
    /// untouched.
    pub fn clear(&mut self) -> &str {
        self.state.display.reset();
        self.state.pending = None;
        self.display()
    }

    /// Remove the trailing display character, bottoming out at `"0"`.
    pub fn backspace(&mut self) -> &str {
        self.state.display.backspace();
        self.display()
    }
}
