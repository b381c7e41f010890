use std::result;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("integer overflow: {lhs} + {rhs}")]
    Overflow { lhs: i32, rhs: i32 },
}

pub type Result<T> = result::Result<T, SampleError>;
