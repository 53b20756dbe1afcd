use std::fmt::Debug;

use crate::{
    combinators::{seq, Seq},
    cursor::Cursor,
    logging::Loggable,
    outcome::Outcome,
    parser::Parser,
};

/// Reads one character and keeps the read only if `pred` accepts it.
/// On failure the caller is left holding the cursor it started with.
#[inline]
fn read_if<'a, F, A>(cursor: Cursor<'a>, pred: F, action: &'static str, args: A) -> Outcome<'a, char>
where
    F: FnOnce(char) -> bool,
    A: Debug,
{
    cursor.log_inputs(action, &args);
    if cursor.at_end() {
        cursor.log_failure(action, &args);
        return Outcome::Failure;
    }
    let (ch, next) = cursor
        .read()
        .unwrap_or_else(|e| panic!("Unexpected {e} on a cursor checked not at end"));
    let outcome = if pred(ch) {
        Outcome::success(next, ch)
    } else {
        Outcome::Failure
    };
    cursor.log_outcome(action, &args, &outcome);
    outcome
}

/// See [`ok`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Epsilon;

/// Always succeeds with `()`, consuming nothing.
pub fn ok() -> Epsilon {
    Epsilon
}

impl<'a> Parser<'a> for Epsilon {
    type Output = ();

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, ()> {
        Outcome::success(cursor, ())
    }
}

/// See [`end`].
#[derive(Debug, Clone, Copy, Default)]
pub struct End;

/// Succeeds with `()` only when no input remains. Consumes nothing.
pub fn end() -> End {
    End
}

impl<'a> Parser<'a> for End {
    type Output = ();

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, ()> {
        let outcome = if cursor.at_end() {
            Outcome::success(cursor, ())
        } else {
            Outcome::Failure
        };
        cursor.log_outcome("end", "", &outcome);
        outcome
    }
}

/// See [`like`].
#[derive(Clone, Copy)]
pub struct Like<F> {
    pred: F,
}

/// One character satisfying `pred`.
pub fn like<F>(pred: F) -> Like<F>
where
    F: Fn(char) -> bool,
{
    Like { pred }
}

impl<'a, F> Parser<'a> for Like<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, char> {
        read_if(cursor, &self.pred, "like", "")
    }
}

/// See [`char()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char {
    ch: char,
}

/// Exactly the character `ch`.
pub fn char(ch: char) -> Char {
    Char { ch }
}

impl<'a> Parser<'a> for Char {
    type Output = char;

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, char> {
        read_if(cursor, |x| x == self.ch, "char", self.ch)
    }
}

/// See [`one_of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    set: String,
}

/// Any one character contained in `set`.
pub fn one_of(set: impl Into<String>) -> OneOf {
    OneOf { set: set.into() }
}

impl<'a> Parser<'a> for OneOf {
    type Output = char;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, char> {
        read_if(cursor, |x| self.set.contains(x), "one_of", &self.set)
    }
}

/// See [`str()`].
#[derive(Debug, Clone)]
pub struct Str {
    text: String,
    chars: Seq<Char>,
}

/// The literal `text`, character by character. Matches all of it or nothing,
/// running out of input part way through is a failure.
pub fn str(text: &str) -> Str {
    Str {
        text: text.to_string(),
        chars: seq(text.chars().map(char)),
    }
}

impl<'a> Parser<'a> for Str {
    type Output = String;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, String> {
        let outcome = self
            .chars
            .run(cursor)
            .map(|cs| cs.into_iter().collect::<String>());
        cursor.log_outcome("str", &self.text, &outcome);
        outcome
    }
}
