use std::{fmt, sync::Arc};

use crate::{
    combinators::{Optional, Or, Plus, Star},
    cursor::Cursor,
    logging::Loggable,
    outcome::Outcome,
    LABEL,
};

/// Something that can be run against a cursor to produce an [`Outcome`].
///
/// Parsers are plain values. Running one never changes it, so a parser built
/// once can be run any number of times from any cursor. Any
/// `Fn(Cursor) -> Outcome` closure or function is a parser.
pub trait Parser<'a> {
    type Output;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, Self::Output>;

    /// Runs against the whole of `input`, see [`crate::run`].
    fn parse(&self, input: &'a str) -> Outcome<'a, Self::Output> {
        crate::run(self, input)
    }

    fn chain<F, P2>(self, f: F) -> Chain<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> P2,
        P2: Parser<'a>,
    {
        chain(self, f)
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        map(self, f)
    }

    fn or<P2>(self, other: P2) -> Or<Self, P2>
    where
        Self: Sized,
        P2: Parser<'a, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    fn star(self) -> Star<Self>
    where
        Self: Sized,
    {
        Star::new(self)
    }

    fn plus(self) -> Plus<Self>
    where
        Self: Sized,
    {
        Plus::new(self)
    }

    fn option(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    fn boxed(self) -> BoxedParser<'a, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        BoxedParser::new(self)
    }
}

impl<'a, R, F> Parser<'a> for F
where
    F: Fn(Cursor<'a>) -> Outcome<'a, R>,
{
    type Output = R;

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, R> {
        (self)(cursor)
    }
}

/// Always succeeds with a clone of `value`, consuming nothing.
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed { value }
}

impl<'a, T: Clone> Parser<'a> for Succeed<T> {
    type Output = T;

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, T> {
        Outcome::success(cursor, self.value.clone())
    }
}

/// As [`succeed`] but builds the value on each run, for values that aren't `Clone`.
#[derive(Clone)]
pub struct SucceedWith<F> {
    make: F,
}

pub fn succeed_with<T, F: Fn() -> T>(make: F) -> SucceedWith<F> {
    SucceedWith { make }
}

impl<'a, T, F> Parser<'a> for SucceedWith<F>
where
    F: Fn() -> T,
{
    type Output = T;

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, T> {
        Outcome::success(cursor, (self.make)())
    }
}

/// Monadic bind: runs `p`, feeds its value to `f`, and runs the parser `f`
/// returns from where `p` stopped.
#[derive(Clone)]
pub struct Chain<P, F> {
    p: P,
    f: F,
}

pub fn chain<'a, P, F, P2>(p: P, f: F) -> Chain<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'a>,
{
    Chain { p, f }
}

impl<'a, P, F, P2> Parser<'a> for Chain<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'a>,
{
    type Output = P2::Output;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, P2::Output> {
        self.p
            .run(cursor)
            .and_then(|cursor, value| (self.f)(value).run(cursor))
    }
}

#[derive(Clone)]
pub struct Map<P, F> {
    p: P,
    f: F,
}

pub fn map<'a, U, P, F>(p: P, f: F) -> Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> U,
{
    Map { p, f }
}

impl<'a, U, P, F> Parser<'a> for Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, U> {
        self.p.run(cursor).map(&self.f)
    }
}

/// A type-erased, cheaply cloned parser. It can be shared between threads,
/// so whatever it wraps must be `Send + Sync`.
///
/// Lets parsers of different concrete types share one type, e.g. as the
/// elements of a [`seq`](crate::combinators::seq) or as the return type of a
/// recursive grammar rule.
pub struct BoxedParser<'a, R> {
    inner: Arc<dyn Parser<'a, Output = R> + Send + Sync + 'a>,
}

impl<'a, R> BoxedParser<'a, R> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'a, Output = R> + Send + Sync + 'a,
    {
        Self {
            inner: Arc::new(parser),
        }
    }
}

impl<'a, R> Clone for BoxedParser<'a, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'a, R> fmt::Debug for BoxedParser<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoxedParser<{}>", std::any::type_name::<R>())
    }
}

impl<'a, R> Parser<'a> for BoxedParser<'a, R> {
    type Output = R;

    #[inline]
    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, R> {
        self.inner.run(cursor)
    }
}

/// Builds its parser only when run. Needed for grammar rules that refer to
/// themselves, which otherwise could not be constructed.
#[derive(Clone)]
pub struct Deferred<F> {
    make: F,
}

pub fn lazy<P, F>(make: F) -> Deferred<F>
where
    F: Fn() -> P,
{
    Deferred { make }
}

impl<'a, P, F> Parser<'a> for Deferred<F>
where
    F: Fn() -> P,
    P: Parser<'a>,
{
    type Output = P::Output;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, P::Output> {
        (self.make)().run(cursor)
    }
}

/// Labels the trace output of everything `p` does, the label column of
/// `RUST_LOG=tc=trace` output shows which rule is running.
#[derive(Debug, Clone)]
pub struct Named<P> {
    label: &'static str,
    p: P,
}

pub fn named<P>(label: &'static str, p: P) -> Named<P> {
    Named { label, p }
}

impl<'a, P> Parser<'a> for Named<P>
where
    P: Parser<'a>,
{
    type Output = P::Output;

    fn run(&self, cursor: Cursor<'a>) -> Outcome<'a, P::Output> {
        let _restore = LabelGuard::set(self.label);
        cursor.log_inputs("named", self.label);
        self.p.run(cursor)
    }
}

/// Puts back the enclosing label when dropped, including during unwinding.
struct LabelGuard {
    outer: &'static str,
}

impl LabelGuard {
    fn set(label: &'static str) -> Self {
        LabelGuard {
            outer: LABEL.with(|f| f.replace(label)),
        }
    }
}

impl Drop for LabelGuard {
    fn drop(&mut self) {
        LABEL.with(|f| f.set(self.outer));
    }
}
