//! Primitives each look at the character under the cursor, or at whether there
//! is one.
//!
//! | parser | matches |
//! |---|---|
//! | `ok()` | nothing, always succeeds |
//! | `end()` | the end of the input |
//! | `char(c)` | the character `c` |
//! | `one_of(set)` | any character in `set` |
//! | `like(pred)` | any character for which `pred` holds |
//! | `str(s)` | the whole of `s`, or nothing |
//!
//! [`run`](crate::run) applies a parser to a string and returns an
//! [`Outcome`](crate::prelude::Outcome). On success it holds the parsed value
//! and a cursor whose `remaining()` is the input not yet consumed.
//!
//!```
//! use tinycomb::prelude::*;
//!
//! let o = run(&str("Hello"), "Hello World");
//! assert_eq!(o.value(), Some(&String::from("Hello")));
//! assert_eq!(o.remaining(), Some(" World"));
//!
//! assert!(run(&str("Bye"), "Hello World").is_failure());
//!```

use crate::prelude::*;

/// A vowel, upper or lower case.
pub fn vowel<'a>() -> impl Parser<'a, Output = char> {
    like(|c| "aeiou".contains(c.to_ascii_lowercase()))
}
