use once_cell::sync::Lazy;

use crate::prelude::*;

static DIGITS: Lazy<Vec<char>> = Lazy::new(|| ('0'..='9').collect());
static IDENT_START: Lazy<Vec<char>> =
    Lazy::new(|| ('a'..='z').chain('A'..='Z').chain(['_']).collect());
static IDENT_CONTINUE: Lazy<Vec<char>> = Lazy::new(|| {
    IDENT_START
        .iter()
        .chain(DIGITS.iter())
        .copied()
        .collect()
});

/// One ASCII digit.
pub fn digit<'a>() -> impl Parser<'a, Output = char> + Clone {
    like(|c| DIGITS.contains(&c))
}

/// One or more ASCII digits.
pub fn digits<'a>() -> impl Parser<'a, Output = String> + Clone {
    digit().plus().map(|ds| ds.into_iter().collect::<String>())
}

/// An optionally negative decimal integer. Fails if it doesn't fit an `i64`.
pub fn integer<'a>() -> impl Parser<'a, Output = i64> + Clone {
    char('-')
        .option()
        .chain(|sign| digits().map(move |ds| (sign, ds)))
        .chain(|(sign, ds)| {
            let text = if sign.is_some() { format!("-{ds}") } else { ds };
            let n = text.parse::<i64>().ok();
            move |c: Cursor<'a>| match n {
                Some(n) => Outcome::success(c, n),
                None => Outcome::Failure,
            }
        })
}

/// Skips zero or more whitespace characters.
pub fn whitespace<'a>() -> impl Parser<'a, Output = ()> + Clone {
    like(char::is_whitespace).star().map(|_| ())
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn identifier<'a>() -> impl Parser<'a, Output = String> + Clone {
    like(|c| IDENT_START.contains(&c)).chain(|head| {
        like(|c| IDENT_CONTINUE.contains(&c))
            .star()
            .map(move |tail| std::iter::once(head).chain(tail).collect::<String>())
    })
}

/// `p` followed by any whitespace, keeping the value of `p`.
pub fn token<'a, P>(p: P) -> impl Parser<'a, Output = P::Output> + Clone
where
    P: Parser<'a> + Clone,
{
    move |c: Cursor<'a>| p.run(c).and_then(|c, v| whitespace().run(c).map(|_| v))
}
