use async_trait::async_trait;
use tracing::debug;

use crate::keys::BinaryOp;

use super::{
    evaluator::Evaluator,
    types::{EvalError, EvalResult},
};

/// In-process evaluator performing the four operations directly on
/// IEEE-754 doubles.
///
/// Division by zero is reported as a fault, not as `Infinity`. NaN
/// operands flow through as a successful NaN result.
#[derive(Clone, Debug)]
pub struct LocalEvaluator {
    name: String,
}

impl LocalEvaluator {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Default for LocalEvaluator {
    fn default() -> Self {
        Self::new("local")
    }
}

#[async_trait]
impl Evaluator for LocalEvaluator {
    async fn evaluate(&self, op: BinaryOp, a: f64, b: f64) -> EvalResult<f64> {
        let value = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
        };
        debug!(%op, a, b, value, "evaluated");
        Ok(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
