use crate::{cursor::Cursor, error::NoMatch};

/// The result of running a parser: either no match, or the value parsed
/// together with the cursor positioned after the consumed input.
///
/// A failure carries nothing, in particular no cursor, so no partially
/// consumed position can leak out of a parser that did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<'a, R> {
    Failure,
    Success { cursor: Cursor<'a>, value: R },
}

impl<'a, R> Outcome<'a, R> {
    #[inline]
    pub fn success(cursor: Cursor<'a>, value: R) -> Self {
        Self::Success { cursor, value }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    pub fn cursor(&self) -> Option<Cursor<'a>> {
        match self {
            Self::Success { cursor, .. } => Some(*cursor),
            Self::Failure => None,
        }
    }

    pub fn value(&self) -> Option<&R> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure => None,
        }
    }

    /// Unparsed input after a success.
    pub fn remaining(&self) -> Option<&'a str> {
        self.cursor().map(|c| c.remaining())
    }

    pub fn into_value(self) -> Option<R> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure => None,
        }
    }

    /// Converts into a `Result` so callers can propagate a failure with `?`.
    pub fn into_result(self) -> Result<(Cursor<'a>, R), NoMatch> {
        match self {
            Self::Success { cursor, value } => Ok((cursor, value)),
            Self::Failure => Err(NoMatch),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<'a, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Success { cursor, value } => Outcome::Success {
                cursor,
                value: f(value),
            },
            Self::Failure => Outcome::Failure,
        }
    }

    /// Continues from a success with the cursor and value it produced.
    /// A failure short-circuits and `f` is never called.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<'a, U>
    where
        F: FnOnce(Cursor<'a>, R) -> Outcome<'a, U>,
    {
        match self {
            Self::Success { cursor, value } => f(cursor, value),
            Self::Failure => Outcome::Failure,
        }
    }

    /// Keeps a success, otherwise evaluates `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success { .. } => self,
            Self::Failure => f(),
        }
    }
}

impl<'a, R> From<Outcome<'a, R>> for Option<(Cursor<'a>, R)> {
    fn from(o: Outcome<'a, R>) -> Self {
        o.into_result().ok()
    }
}
