//! A grammar rule that refers to itself can't be built eagerly, the
//! construction would never finish. [`lazy`](crate::prelude::lazy) defers
//! building the inner parser until it runs, and [`BoxedParser`] gives the
//! rule a nameable return type.
//!
//! ```text
//! expr   = term ('+' term)*
//! term   = factor ('*' factor)*
//! factor = integer | '(' expr ')'
//! ```

use crate::contrib::{integer, token, whitespace};
use crate::prelude::*;

pub fn expr<'a>() -> BoxedParser<'a, i64> {
    named(
        "expr",
        term().chain(|first| {
            token(char('+'))
                .chain(|_| term())
                .star()
                .map(move |rest| first + rest.iter().sum::<i64>())
        }),
    )
    .boxed()
}

fn term<'a>() -> BoxedParser<'a, i64> {
    named(
        "term",
        factor().chain(|first| {
            token(char('*'))
                .chain(|_| factor())
                .star()
                .map(move |rest| rest.iter().fold(first, |acc, n| acc * n))
        }),
    )
    .boxed()
}

fn factor<'a>() -> BoxedParser<'a, i64> {
    let bracketed = token(char('('))
        .chain(|_| lazy(expr))
        .chain(|value| token(char(')')).map(move |_| value));
    token(integer()).or(bracketed).boxed()
}

/// The value of a whole arithmetic expression, `None` if any input is left over.
pub fn evaluate(input: &str) -> Option<i64> {
    let whole = whitespace()
        .chain(|_| expr())
        .chain(|value| end().map(move |_| value));
    run(&whole, input).into_value()
}
