//! # TENKEY: Keypad Calculator Engine
//!
//! TENKEY turns a serialized stream of discrete key events — digits,
//! operators, equals, clear, backspace — into a well-defined arithmetic
//! result, accumulating a running expression of at most one pending
//! binary operation.
//!
//! ## Architecture
//!
//! ### 1. Closed Event Vocabulary
//! Every interaction is one of five key events ([`keys`]), dispatched
//! to a single handler. There is no other API surface.
//!
//! ### 2. Explicit State Machine
//! The engine ([`engine`]) mutates one owned [`state::CalculatorState`]
//! per session: a never-empty display buffer, an optional pending
//! operation, and a busy flag. Pressing an operator while one is
//! pending resolves the pending operation first — chained input
//! evaluates left to right, not by precedence.
//!
//! ### 3. Delegated Arithmetic
//! Completed computations go to an asynchronous [`evaluator`]
//! capability that may be slow and may fail. Every fault collapses
//! into a single `"Error"` display state; nothing is retried and no
//! timeout is imposed by the engine.
//!
//! ### 4. Session Lifecycle
//! A [`session`] owns one engine for one user and can be spawned onto
//! the runtime, consuming keys from an mpsc channel and publishing
//! display values on a watch channel ([`session::Session::spawn`]).
//!
//! ## Key Flow
//!
//! ```text
//! Key event → CalculatorEngine::handle_key → state mutation
//!                    │ (equals / chained operator)
//!                    ▼
//!              Evaluator::evaluate ──▶ display value or "Error"
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod keys;
pub mod session;
pub mod state;

// Re-exports
pub use engine::*;
pub use error::*;
pub use keys::*;
pub use state::*;
