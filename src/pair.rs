use std::fmt;
use std::fmt::{Display, Formatter};

use anyhow::Result;

/// Two values of the same type. Neither slot is ever mutated by this crate;
/// `swap` hands back a new pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<T> {
    pub first: T,
    pub second: T,
}

impl<T> Pair<T> {
    pub fn swap(self) -> Self {
        swap(self)
    }
}

/// Construct a Pair from the provided values.
pub fn make_pair<T>(first: T, second: T) -> Pair<T> {
    Pair { first, second }
}

/// Return a new Pair with elements flipped.
pub fn swap<T>(input: Pair<T>) -> Pair<T> {
    make_pair(input.second, input.first)
}

impl<T: Display> Display for Pair<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((first, second): (T, T)) -> Self {
        make_pair(first, second)
    }
}

impl<T> From<Pair<T>> for (T, T) {
    fn from(pair: Pair<T>) -> Self {
        (pair.first, pair.second)
    }
}

impl<T> TryFrom<Vec<T>> for Pair<T> {
    type Error = anyhow::Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        let len = values.len();
        let mut iter = values.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(first), Some(second), None) => Ok(make_pair(first, second)),
            _ => Err(anyhow::format_err!(
                "expected 2 elements for a pair, got {}",
                len
            )),
        }
    }
}
