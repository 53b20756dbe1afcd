#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

/*!
# tinycomb
- a minimal parser-combinator library over in-memory text
- every parser is a plain value, built once by composition and run any number of times

Main concepts:

# Cursor
An immutable position in the text being parsed. Reading a character hands back
a new cursor, the old one is untouched, so retrying an alternative is just a
matter of running it from the cursor you already have.

# Parser
Anything that turns a [`Cursor`](prelude::Cursor) into an
[`Outcome`](prelude::Outcome): either `Failure`, or `Success` with the value
parsed and the cursor after it. Primitives match single characters and
literals, combinators build bigger parsers out of smaller ones.

```
use tinycomb::prelude::*;

let greeting = seq([str("hello"), str(", "), str("world")])
    .map(|parts| parts.concat())
    .chain(|s| end().map(move |_| s.clone()));

let outcome = run(&greeting, "hello, world");
assert_eq!(outcome.into_value(), Some(String::from("hello, world")));

assert!(run(&greeting, "hello, mars").is_failure());
```

# Testing
Parsing can be traced through the `log` crate under the target `tc`.
With `env_logger` and `test-log` as dev-dependencies

```sh
RUST_LOG=tc=trace cargo test mytest -- --nocapture
```
*/

use std::cell::Cell;

mod combinators;
mod cursor;
mod error;
mod logging;
mod outcome;
mod parser;
mod primitives;
mod util;

pub mod contrib;
pub mod prelude;

#[cfg(any(feature = "cookbook", test))]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "tc";

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));

use log::debug;

use crate::{cursor::Cursor, outcome::Outcome, parser::Parser};

/// Runs `parser` once over the whole of `input`, starting at offset 0.
pub fn run<'a, P>(parser: &P, input: &'a str) -> Outcome<'a, P::Output>
where
    P: Parser<'a> + ?Sized,
{
    let cursor = Cursor::from(input);
    debug!(target: LOG_TARGET, "run {p} on {len} bytes", p = std::any::type_name::<P>(), len = input.len());
    let outcome = parser.run(cursor);
    match &outcome {
        Outcome::Success { cursor, .. } => {
            debug!(target: LOG_TARGET, "run matched, {} bytes remain", cursor.remaining().len())
        }
        Outcome::Failure => debug!(target: LOG_TARGET, "run failed"),
    }
    outcome
}
