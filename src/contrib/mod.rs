//! Ready-made parsers for common lexical pieces, built from the primitives.

mod parsers;

pub use parsers::{digit, digits, identifier, integer, token, whitespace};
