use std::error::Error;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum LookupError {
    #[error("usage: `{0}` <hostname>")]
    Usage(String),
    #[error("invalid hostname `{0}`: `{1}`")]
    InvalidHostname(String, String),
    #[error("resolver returned `{0}`: `{1}`")]
    Resolution(i32, String),
    #[error("unsupported address family: `{0}`")]
    UnsupportedFamily(i32),
    #[error("unsupported socket type: `{0}`")]
    UnsupportedSocketType(i32),
    #[error("malformed socket address: `{0}`")]
    MalformedAddress(String),
    #[error("failed while trying to `{0}` data: `{1}`")]
    Io(String, String),
}

pub type Result<T> = std::result::Result<T, LookupError>;

pub fn map_io_err(step: &str, err: &impl Error) -> LookupError {
    LookupError::Io(String::from(step), err.to_string())
}
