use std::{error::Error, fmt};

/// Indicates whether an error can be recovered from, and parsing can continue.
/// A parser that did not match is recoverable (try another alternative);
/// reading past the end of the input is a broken invariant and is not.
pub trait Recoverable {
    fn is_recoverable(&self) -> bool;
}

/// Misuse of a [`Cursor`](crate::cursor::Cursor). Never produced by the
/// combinators themselves, which check for end-of-input before reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    ReadPastEnd { offset: usize },
}

impl Recoverable for CursorError {
    fn is_recoverable(&self) -> bool {
        false
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ReadPastEnd { offset } => {
                write!(f, "InvariantViolation: read past end of input (offset={offset})")?
            }
        };
        Ok(())
    }
}

impl Error for CursorError {}

/// The parser did not match. Carries no position or expectation, callers
/// wanting diagnostics wrap the engine with their own layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMatch;

impl Recoverable for NoMatch {
    fn is_recoverable(&self) -> bool {
        true
    }
}

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FailedMatch")
    }
}

impl Error for NoMatch {}
