use std::error::Error as StdError;

mod extract;
mod fmt;
mod functor;
mod future;

/// A value that is exactly one of `Left(L)` or `Right(R)`.
///
/// By convention `Left` holds the failure or absence case and `Right` the
/// success case. Equality, ordering and hashing are structural and exist only
/// when both payload types provide them; every `Left` orders before every
/// `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[inline]
    pub fn left(l: L) -> Either<L, R> {
        Either::Left(l)
    }

    #[inline]
    pub fn right(r: R) -> Either<L, R> {
        Either::Right(r)
    }

    /// `Right(pass())` when `condition` holds, `Left(fail())` otherwise.
    /// Only the selected thunk is invoked.
    pub fn cond<P, F>(condition: bool, pass: P, fail: F) -> Either<L, R>
    where
        P: FnOnce() -> R,
        F: FnOnce() -> L,
    {
        if condition {
            Either::Right(pass())
        } else {
            Either::Left(fail())
        }
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        match self {
            Either::Left(_) => true,
            _ => false,
        }
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        match self {
            Either::Right(_) => true,
            _ => false,
        }
    }

    #[inline]
    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    #[inline]
    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Collapses both variants into a single value. Every other
    /// transformation can be written in terms of `fold`.
    ///
    /// Field projections work the same as transformations, pass a closure
    /// such as `|p: Point| p.x` or a function item such as `String::len`.
    pub fn fold<V, Fl, Fr>(self, on_left: Fl, on_right: Fr) -> V
    where
        Fl: FnOnce(L) -> V,
        Fr: FnOnce(R) -> V,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    pub fn fold_ref<V, Fl, Fr>(&self, on_left: Fl, on_right: Fr) -> V
    where
        Fl: FnOnce(&L) -> V,
        Fr: FnOnce(&R) -> V,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}

impl<L: StdError, R> Either<L, R> {
    /// Wraps an error as the `Left` variant.
    #[inline]
    pub fn error(e: L) -> Either<L, R> {
        Either::Left(e)
    }
}
