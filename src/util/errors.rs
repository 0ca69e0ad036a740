use std::result::Result as stdResult;
use thiserror::Error;

pub type Result<T> = stdResult<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("expected right, found left {0}")]
    UnexpectedLeft(String),
    #[error("expected left, found right {0}")]
    UnexpectedRight(String),
}
