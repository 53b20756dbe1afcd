use crate::{
    cursor::Cursor,
    logging::Loggable,
    outcome::Outcome,
    parser::{succeed_with, Parser},
};

/// See [`seq`].
#[derive(Debug, Clone)]
pub struct Seq<P> {
    parsers: Vec<P>,
}

/// Runs each parser from where the previous one stopped, collecting the values
/// in order. The first failure fails the whole sequence and the remaining
/// parsers are not run. No parsers at all matches the empty sequence.
pub fn seq<P, I>(parsers: I) -> Seq<P>
where
    I: IntoIterator<Item = P>,
{
    Seq {
        parsers: parsers.into_iter().collect(),
    }
}

impl<'a, P> Parser<'a> for Seq<P>
where
    P: Parser<'a>,
{
    type Output = Vec<P::Output>;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, Vec<P::Output>> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut current = cursor;
        for (i, p) in self.parsers.iter().enumerate() {
            match p.run(current) {
                Outcome::Success { cursor, value } => {
                    values.push(value);
                    current = cursor;
                }
                Outcome::Failure => {
                    current.log_failure("seq", i);
                    return Outcome::Failure;
                }
            }
        }
        current.log_success("seq", values.len());
        Outcome::success(current, values)
    }
}

/// See [`or`].
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Or { left, right }
    }
}

/// Ordered choice. `left` is always tried first and wins whenever it matches,
/// `right` is only tried from the original position when `left` fails.
pub fn or<'a, L, R>(left: L, right: R) -> Or<L, R>
where
    L: Parser<'a>,
    R: Parser<'a, Output = L::Output>,
{
    Or::new(left, right)
}

impl<'a, L, R> Parser<'a> for Or<L, R>
where
    L: Parser<'a>,
    R: Parser<'a, Output = L::Output>,
{
    type Output = L::Output;

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, L::Output> {
        self.left.run(cursor).or_else(|| {
            cursor.log_inputs("or", "right");
            self.right.run(cursor)
        })
    }
}

// `star(p)` behaves as `or(plus(p), [])` and `plus(p)` as `p` followed by
// `star(p)` with the first value prepended. Both run as a loop so the stack
// does not grow with the number of repetitions.
fn repeat<'a, P>(p: &P, cursor: Cursor<'a>, mut values: Vec<P::Output>) -> (Cursor<'a>, Vec<P::Output>)
where
    P: Parser<'a> + ?Sized,
{
    let mut current = cursor;
    while let Outcome::Success { cursor, value } = p.run(current) {
        values.push(value);
        current = cursor;
    }
    (current, values)
}

/// See [`star`].
#[derive(Debug, Clone)]
pub struct Star<P> {
    p: P,
}

impl<P> Star<P> {
    pub fn new(p: P) -> Self {
        Star { p }
    }
}

/// Zero or more repetitions of `p`, as many as match. Never fails.
///
/// `p` must consume input whenever it succeeds, otherwise the repetition
/// never ends (`star(ok())` does not terminate).
pub fn star<'a, P: Parser<'a>>(p: P) -> Star<P> {
    Star::new(p)
}

impl<'a, P> Parser<'a> for Star<P>
where
    P: Parser<'a>,
{
    type Output = Vec<P::Output>;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, Vec<P::Output>> {
        cursor.log_inputs("star", "");
        let (cursor, values) = repeat(&self.p, cursor, Vec::new());
        cursor.log_success("star", values.len());
        Outcome::success(cursor, values)
    }
}

/// See [`plus`].
#[derive(Debug, Clone)]
pub struct Plus<P> {
    p: P,
}

impl<P> Plus<P> {
    pub fn new(p: P) -> Self {
        Plus { p }
    }
}

/// One or more repetitions of `p`, as many as match. Fails only when the
/// first repetition fails. The same consumption caveat as [`star`] applies.
pub fn plus<'a, P: Parser<'a>>(p: P) -> Plus<P> {
    Plus::new(p)
}

impl<'a, P> Parser<'a> for Plus<P>
where
    P: Parser<'a>,
{
    type Output = Vec<P::Output>;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, Vec<P::Output>> {
        cursor.log_inputs("plus", "");
        let outcome = self.p.run(cursor).and_then(|cursor, first| {
            let (cursor, values) = repeat(&self.p, cursor, vec![first]);
            Outcome::success(cursor, values)
        });
        match &outcome {
            Outcome::Success { cursor, value } => cursor.log_success("plus", value.len()),
            Outcome::Failure => cursor.log_failure("plus", ""),
        }
        outcome
    }
}

/// See [`option`].
#[derive(Debug, Clone)]
pub struct Optional<P> {
    p: P,
}

impl<P> Optional<P> {
    pub fn new(p: P) -> Self {
        Optional { p }
    }
}

/// `Some(value)` when `p` matches, otherwise `None` without consuming
/// anything. Never fails. `None` here means "matched nothing", which is a
/// success, unlike [`Outcome::Failure`].
pub fn option<'a, P: Parser<'a>>(p: P) -> Optional<P> {
    Optional::new(p)
}

impl<'a, P> Parser<'a> for Optional<P>
where
    P: Parser<'a>,
{
    type Output = Option<P::Output>;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, Option<P::Output>> {
        let present = |c: Cursor<'a>| self.p.run(c).map(Some);
        let outcome = Or::new(present, succeed_with(|| None)).run(cursor);
        debug_assert!(outcome.is_success(), "option never fails");
        outcome
    }
}
