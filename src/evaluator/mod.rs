//! # Evaluator Capability
//!
//! The engine owns no arithmetic. Every completed computation is
//! delegated to an [`Evaluator`], an asynchronous capability that may
//! be slow and may fail:
//!
//! ```text
//! ┌────────┐  evaluate(op, a, b)  ┌───────────┐
//! │ Engine │─────────────────────▶│ Evaluator │
//! └────────┘◀─────────────────────└───────────┘
//!             EvalResult<f64>
//! ```
//!
//! Faults of any kind — malformed input, division by zero, transport
//! failure in a remote implementation — are reported as [`EvalError`]
//! and collapse into a single user-visible error state at the engine's
//! equals boundary.
//!
//! [`LocalEvaluator`] is the in-process implementation; the
//! [`EvaluatorRegistry`] builds named instances from configuration and
//! tracks which one sessions are wired to by default.

pub mod local;
pub mod registry;
pub mod types;

#[allow(clippy::module_inception)]
pub mod evaluator;

// Re-exports
pub use evaluator::{Evaluator, EvaluatorType, MockEvaluator};
pub use local::LocalEvaluator;
pub use registry::{EvaluatorInstance, EvaluatorRegistry};
pub use types::{EvalError, EvalResult};
