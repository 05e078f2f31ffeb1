use thiserror::Error;

/// Faults an evaluator can report.
///
/// The engine does not distinguish the variants: every fault surfaces
/// as the same user-visible error state at the equals boundary. The
/// split exists for logging and for callers that own evaluators
/// directly (registry wiring, health checks).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
    #[error("Evaluator not found: {0}")]
    EvaluatorNotFound(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EvalResult<T> = Result<T, EvalError>;
