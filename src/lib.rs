//! A two-variant sum type, `Either<L, R>`, holding exactly one of a `Left`
//! or a `Right` value, with the functor, monad and conversion operations
//! around it and helpers for splitting sequences of them.

mod either;
pub mod partition;
pub mod util;

pub use either::Either;
pub use partition::EitherIterator;
pub use util::{Error, Result};
