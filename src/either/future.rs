use super::Either;
use futures::stream::Stream;
use futures::task::{Context, Poll};
use std::future::Future;
use std::pin::Pin;

impl<L, R> Either<L, R> {
    /// Projects a pinned `Either` onto its pinned payload.
    pub fn as_pin_mut(self: Pin<&mut Self>) -> Either<Pin<&mut L>, Pin<&mut R>> {
        // The payload is never moved out of `self`, so pinning it is sound.
        unsafe {
            match self.get_unchecked_mut() {
                Either::Left(l) => Either::Left(Pin::new_unchecked(l)),
                Either::Right(r) => Either::Right(Pin::new_unchecked(r)),
            }
        }
    }
}

impl<L, R> Future for Either<L, R>
where
    L: Future,
    R: Future<Output = L::Output>,
{
    type Output = L::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.as_pin_mut() {
            Either::Left(l) => l.poll(cx),
            Either::Right(r) => r.poll(cx),
        }
    }
}

impl<L, R> Stream for Either<L, R>
where
    L: Stream,
    R: Stream<Item = L::Item>,
{
    type Item = L::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.as_pin_mut() {
            Either::Left(l) => l.poll_next(cx),
            Either::Right(r) => r.poll_next(cx),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Either::Left(l) => l.size_hint(),
            Either::Right(r) => r.size_hint(),
        }
    }
}

impl<L, R, T> Iterator for Either<L, R>
where
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Either::Left(l) => l.size_hint(),
            Either::Right(r) => r.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::run_in_tokio;
    use futures::future::{self, BoxFuture, FutureExt, Ready};
    use futures::stream::{self, StreamExt};

    fn pick(flag: bool) -> Either<Ready<i32>, BoxFuture<'static, i32>> {
        if flag {
            Either::left(future::ready(1))
        } else {
            Either::right(async { 2 }.boxed())
        }
    }

    #[test]
    fn test_future() {
        run_in_tokio(async {
            assert_eq!(pick(true).await, 1);
            assert_eq!(pick(false).await, 2);
        });
    }

    #[test]
    fn test_future_of_tasks() {
        run_in_tokio(async {
            let slow = async {
                tokio::task::yield_now().await;
                "slow"
            };
            let e: Either<_, Ready<&str>> = Either::left(Box::pin(slow));
            assert_eq!(e.await, "slow");
        });
    }

    #[test]
    fn test_stream() {
        run_in_tokio(async {
            let e: Either<_, stream::Empty<i32>> = Either::left(stream::iter(vec![1, 2, 3]));
            assert_eq!(e.collect::<Vec<_>>().await, vec![1, 2, 3]);

            let e: Either<stream::Iter<std::vec::IntoIter<i32>>, _> =
                Either::right(stream::empty::<i32>());
            assert_eq!(e.collect::<Vec<_>>().await, Vec::<i32>::new());
        });
    }

    #[test]
    fn test_iterator() {
        let evens = |n: u32| -> Either<std::ops::Range<u32>, std::iter::Once<u32>> {
            if n % 2 == 0 {
                Either::left(0..n)
            } else {
                Either::right(std::iter::once(n))
            }
        };
        assert_eq!(evens(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(evens(5).collect::<Vec<_>>(), vec![5]);
        assert_eq!(evens(4).size_hint(), (4, Some(4)));
    }
}
