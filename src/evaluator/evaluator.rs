use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::keys::BinaryOp;

use super::types::EvalResult;

/// Arithmetic capability consumed by the engine.
///
/// The contract is deliberately narrow: one binary operation over two
/// IEEE-754 doubles, asynchronous, with any fault reported as an
/// [`EvalError`](super::types::EvalError). The engine imposes no
/// timeout of its own; an evaluator that never answers leaves the
/// pending equals call suspended.
#[mockall::automock]
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, op: BinaryOp, a: f64, b: f64) -> EvalResult<f64>;

    fn name(&self) -> &str;

    async fn health_check(&self) -> EvalResult<()> {
        Ok(())
    }

    async fn shutdown(&self) -> EvalResult<()> {
        Ok(())
    }
}

#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    Default,
    PartialEq,
    PartialOrd,
)]
pub enum EvaluatorType {
    #[default]
    Local,
    Unknown,
}

impl From<EvaluatorType> for String {
    fn from(evaluator_type: EvaluatorType) -> Self {
        evaluator_type.to_string()
    }
}
