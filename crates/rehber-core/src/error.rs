//! Error types for Rehber

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Validation Errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Result code reported when this error terminates a tool invocation.
    pub fn result_code(&self) -> crate::ResultCode {
        match self {
            Error::InvalidArgument(_) => crate::ResultCode::ParamError,
        }
    }
}
