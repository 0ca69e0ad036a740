use super::Either;
use std::error::Error as StdError;

impl<L, R> Either<L, R> {
    /// Transforms the `Right` value, a `Left` is returned untouched.
    pub fn map<R2, F>(self, op: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(op(r)),
        }
    }

    pub fn map_left<L2, F>(self, op: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(op(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn bimap<L2, R2, Fl, Fr>(self, on_left: Fl, on_right: Fr) -> Either<L2, R2>
    where
        Fl: FnOnce(L) -> L2,
        Fr: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Chains an `Either`-producing computation on the `Right` value. The
    /// result of `op` is returned as is.
    pub fn flat_map<R2, F>(self, op: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => op(r),
        }
    }

    pub fn flat_map_left<L2, F>(self, op: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => op(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }
}

impl<L: StdError, R> Either<L, R> {
    pub fn map_error<L2, F>(self, op: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.map_left(op)
    }

    pub fn flat_map_error<L2, F>(self, op: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.flat_map_left(op)
    }
}

impl<T> Either<T, T> {
    /// Returns the contained value whichever side holds it.
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Either::Left(t) => t,
            Either::Right(t) => t,
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        match self {
            Either::Left(t) => t,
            Either::Right(t) => t,
        }
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        match self {
            Either::Left(t) => t,
            Either::Right(t) => t,
        }
    }

    /// Applies `op` to the value and keeps it on the same side.
    pub fn map_both<U, F>(self, op: F) -> Either<U, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Either::Left(t) => Either::Left(op(t)),
            Either::Right(t) => Either::Right(op(t)),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting on the right side. An inner `Left`
    /// becomes the `Left` of the result.
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }

    #[inline]
    pub fn join_right(self) -> Either<L, R> {
        self.flatten()
    }
}

impl<L, R> Either<Either<L, R>, R> {
    pub fn join_left(self) -> Either<L, R> {
        self.flat_map_left(|inner| inner)
    }
}
