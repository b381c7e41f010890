mod error;

pub mod math;
pub mod pair;
pub mod text;

pub use error::{Result, SampleError};
pub use math::{add, checked_add, checked_triple, triple};
pub use pair::{make_pair, swap, Pair};
pub use text::{decorated, greet, GREETING_PREFIX};
