use crate::either::Either;

/// Classifies every item and splits the results into `(lefts, rights)`,
/// keeping the input order on each side.
pub fn partition_map<I, T, L, R, F>(iter: I, mut classify: F) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Either<L, R>,
{
    let mut lefts = vec![];
    let mut rights = vec![];
    for item in iter {
        match classify(item) {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }
    (lefts, rights)
}

pub fn partitioned<I, L, R>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    partition_map(iter, |e| e)
}

pub fn lefts<I, L, R>(iter: I) -> Vec<L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_left).collect()
}

pub fn rights<I, L, R>(iter: I) -> Vec<R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_right).collect()
}

/// Splits items by `predicate` into `(failed, passed)`.
pub fn partition<I, T, P>(iter: I, mut predicate: P) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    partition_map(iter, |item| {
        let passed = predicate(&item);
        Either::cond(passed, || (), || ()).map_both(|_| item)
    })
}

/// Iterator adaptors over the free functions of this module.
pub trait EitherIterator: Iterator + Sized {
    fn partition_map<L, R, F>(self, classify: F) -> (Vec<L>, Vec<R>)
    where
        F: FnMut(Self::Item) -> Either<L, R>,
    {
        partition_map(self, classify)
    }

    fn partitioned<L, R>(self) -> (Vec<L>, Vec<R>)
    where
        Self: Iterator<Item = Either<L, R>>,
    {
        partitioned(self)
    }

    fn lefts<L, R>(self) -> Vec<L>
    where
        Self: Iterator<Item = Either<L, R>>,
    {
        lefts(self)
    }

    fn rights<L, R>(self) -> Vec<R>
    where
        Self: Iterator<Item = Either<L, R>>,
    {
        rights(self)
    }

    /// `(failed, passed)`; named apart from `Iterator::partition`, which
    /// returns the matching items first.
    fn partition_by<P>(self, predicate: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        P: FnMut(&Self::Item) -> bool,
    {
        partition(self, predicate)
    }
}

impl<I: Iterator> EitherIterator for I {}
