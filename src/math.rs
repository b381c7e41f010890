use crate::error::{Result, SampleError};

/// Return the sum of two integers, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Return three times the provided value using `add`.
///
/// The value is doubled first and then added once more, so each step wraps
/// on its own.
pub fn triple(value: i32) -> i32 {
    let doubled = add(value, value);
    add(doubled, value)
}

pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b)
        .ok_or(SampleError::Overflow { lhs: a, rhs: b })
}

pub fn checked_triple(value: i32) -> Result<i32> {
    let doubled = checked_add(value, value)?;
    checked_add(doubled, value)
}
