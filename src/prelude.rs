pub use crate::combinators::{option, or, plus, seq, star, Optional, Or, Plus, Seq, Star};
pub use crate::cursor::Cursor;
pub use crate::error::{CursorError, NoMatch, Recoverable};
pub use crate::outcome::Outcome;
pub use crate::parser::{
    chain, lazy, map, named, succeed, succeed_with, BoxedParser, Chain, Deferred, Map, Named, Parser,
    Succeed, SucceedWith,
};
pub use crate::primitives::{char, end, like, ok, one_of, str, Char, End, Epsilon, Like, OneOf, Str};
pub use crate::run;
