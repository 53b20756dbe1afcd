use std::fmt;

use crate::{error::CursorError, logging::Loggable, util};

/// An immutable position within the text being parsed.
///
/// `offset` is a byte offset that always sits on a char boundary. Reading
/// never changes a cursor, it hands back a new one positioned after the
/// character read, so any earlier cursor can be used again to retry from
/// where it stood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> From<&'a str> for Cursor<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        let cur = Self::new(s);
        cur.log_success("Cursor::from", "");
        cur
    }
}

impl<'a> fmt::Display for Cursor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cursor({offset}, {rem})",
            offset = self.offset,
            rem = util::formatter_str(self.remaining()).trim_end()
        )
    }
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// The unread suffix of the input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// The input already read.
    pub fn consumed(&self) -> &'a str {
        &self.input[..self.offset]
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The next character and a cursor positioned after it.
    ///
    /// Calling this at end of input is a programming error, callers check
    /// [`Cursor::at_end`] first.
    #[inline]
    pub fn read(&self) -> Result<(char, Self), CursorError> {
        match self.peek() {
            Some(ch) => Ok((
                ch,
                Self {
                    input: self.input,
                    offset: self.offset + ch.len_utf8(),
                },
            )),
            None => Err(CursorError::ReadPastEnd {
                offset: self.offset,
            }),
        }
    }
}
