use super::Either;
use crate::util::{Error, Result};
use std::error::Error as StdError;
use std::fmt::Debug;

impl<L, R> Either<L, R> {
    /// Returns the `Right` value, or evaluates `fallback` for a `Left`.
    /// `fallback` is never called on a `Right`.
    pub fn get_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Either::Left(_) => fallback(),
            Either::Right(r) => r,
        }
    }

    pub fn or(self, alternative: Either<L, R>) -> Either<L, R> {
        match self {
            Either::Left(_) => alternative,
            right => right,
        }
    }

    /// Like `or`, with the alternative built from the `Left` value only when
    /// it is needed.
    pub fn or_else<F>(self, alternative: F) -> Either<L, R>
    where
        F: FnOnce(L) -> Either<L, R>,
    {
        match self {
            Either::Left(l) => alternative(l),
            right => right,
        }
    }

    /// Fails with `error()` on a `Left`, the left payload is dropped.
    pub fn get_or_throw<E, F>(self, error: F) -> std::result::Result<R, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Either::Left(_) => Err(error()),
            Either::Right(r) => Ok(r),
        }
    }

    /// Runs `effect` on the `Right` value and hands the value back unchanged.
    pub fn inspect<F>(self, effect: F) -> Either<L, R>
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            effect(r);
        }
        self
    }

    pub fn inspect_left<F>(self, effect: F) -> Either<L, R>
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            effect(l);
        }
        self
    }

    /// Keeps a `Right` only if `predicate` holds, otherwise replaces it with
    /// `Left(produce())`. `produce` runs only when the predicate fails.
    pub fn filter<P, F>(self, predicate: P, produce: F) -> Either<L, R>
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce() -> L,
    {
        match self {
            Either::Right(r) => {
                if predicate(&r) {
                    Either::Right(r)
                } else {
                    Either::Left(produce())
                }
            }
            left => left,
        }
    }

    /// Calls `effect` once per element of a `Right` sequence. Does nothing
    /// on a `Left`. Distinct from `Iterator::for_each`, which an `Either` of
    /// two iterators also has and which walks either side.
    pub fn for_each_right<'a, F>(&'a self, effect: F)
    where
        &'a R: IntoIterator,
        F: FnMut(<&'a R as IntoIterator>::Item),
    {
        if let Either::Right(r) = self {
            r.into_iter().for_each(effect);
        }
    }

    /// `true` when every element of a `Right` sequence satisfies
    /// `predicate` (so an empty sequence passes). A `Left` always yields
    /// `false`: there is no sequence to check.
    pub fn for_all<'a, P>(&'a self, predicate: P) -> bool
    where
        &'a R: IntoIterator,
        P: FnMut(<&'a R as IntoIterator>::Item) -> bool,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(r) => r.into_iter().all(predicate),
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<R> {
        self.into_right()
    }

    /// An empty vector for a `Left`, a single element for a `Right`.
    pub fn into_vec(self) -> Vec<R> {
        match self {
            Either::Left(_) => vec![],
            Either::Right(r) => vec![r],
        }
    }
}

impl<L: Debug, R> Either<L, R> {
    pub fn require_right(self) -> Result<R> {
        match self {
            Either::Left(l) => Err(Error::UnexpectedLeft(format!("{:?}", l))),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<L, R: Debug> Either<L, R> {
    pub fn require_left(self) -> Result<L> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(r) => Err(Error::UnexpectedRight(format!("{:?}", r))),
        }
    }
}

impl<L: StdError, R> Either<L, R> {
    /// Returns the `Right` value or fails with the held error as is.
    pub fn try_get(self) -> std::result::Result<R, L> {
        self.into_result()
    }

    pub fn into_result(self) -> std::result::Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<std::result::Result<R, L>> for Either<L, R> {
    fn from(result: std::result::Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for std::result::Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}
