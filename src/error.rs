use thiserror::Error;

use crate::invocation::errors::InvocationError;
use crate::logging::LoggingError;

#[derive(Debug, Error)]
pub enum PartError {
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

impl PartError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PartError::Invocation(err) => err.exit_code(),
            PartError::Logging(_) => crate::invocation::errors::GENERIC_FAILURE,
        }
    }
}
