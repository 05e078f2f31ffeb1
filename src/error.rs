use thiserror::Error;

use crate::evaluator::EvalError;
use crate::keys::KeyError;
use crate::session::SessionError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Evaluator error: {0}")]
    Eval(#[from] EvalError),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    #[error("Key error: {0}")]
    Key(#[from] KeyError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}
