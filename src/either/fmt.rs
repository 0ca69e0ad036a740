use super::Either;
use std::any::type_name;
use std::fmt::{self, Debug, Display, Write};

/// Renders `.left(<payload>)` or `.right(<payload>)` with the payload's
/// `Debug` form.
impl<L: Debug, R: Debug> Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, ".left({:?})", l),
            Either::Right(r) => write!(f, ".right({:?})", r),
        }
    }
}

impl<L: Debug, R: Debug> Either<L, R> {
    /// Like the `Display` form, prefixed with the full type name, e.g.
    /// `Either<i32, alloc::string::String>.left(1)`.
    pub fn debug_description(&self) -> String {
        format!("Either<{}, {}>{}", type_name::<L>(), type_name::<R>(), self)
    }

    /// Writes `items`, then the description, joined by `separator` and
    /// followed by `terminator`.
    pub fn write_debug<W, I, D>(
        &self,
        sink: &mut W,
        items: I,
        separator: &str,
        terminator: &str,
    ) -> fmt::Result
    where
        W: Write,
        I: IntoIterator<Item = D>,
        D: Display,
    {
        for item in items {
            write!(sink, "{}{}", item, separator)?;
        }
        write!(sink, "{}{}", self, terminator)
    }

    /// Emits the description on the diagnostic sink and returns `self`.
    pub fn debug(self) -> Self {
        self.debug_with(std::iter::empty::<&str>(), " ", "\n")
    }

    /// Emits `items` and the description on the diagnostic sink. If an
    /// item's `Display` fails, a warning is emitted and the line is logged
    /// as far as it was rendered.
    pub fn debug_with<I, D>(self, items: I, separator: &str, terminator: &str) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Display,
    {
        let mut line = String::new();
        if let Err(e) = self.write_debug(&mut line, items, separator, terminator) {
            tracing::warn!(target: "duality", "debug line truncated: {}", e);
        }
        tracing::debug!(target: "duality", "{}", line);
        self
    }
}
