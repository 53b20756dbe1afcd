//! Bigger parsers are built from smaller ones.
//!
//! - `seq` runs parsers of one type in turn, collecting their values
//! - `p.chain(f)` runs `p`, then the parser `f` builds from its value
//! - `p.map(f)` transforms a value
//! - `or` / `p.or(q)` tries `p`, then `q` from the same place
//! - `star`, `plus` repeat, `option` makes a parser optional
//!
//! Here a clock time `hh:mm:ss` with optional milliseconds `.sss` is parsed
//! into a struct.

use crate::prelude::*;

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Time(pub u32, pub u32, pub f64);

fn two_digits<'a>() -> impl Parser<'a, Output = u32> {
    let digit = || like(|c| c.is_ascii_digit());
    seq([digit(), digit()]).map(|ds| {
        ds.into_iter()
            .filter_map(|d| d.to_digit(10))
            .fold(0, |acc, d| acc * 10 + d)
    })
}

/// The three digits after the point.
fn millis<'a>() -> impl Parser<'a, Output = String> {
    char('.')
        .chain(|_| seq([one_of("0123456789"), one_of("0123456789"), one_of("0123456789")]))
        .map(|ds| ds.into_iter().collect::<String>())
}

pub fn time<'a>() -> impl Parser<'a, Output = Time> {
    two_digits()
        .chain(|hh| char(':').chain(|_| two_digits()).map(move |mm| (hh, mm)))
        .chain(|(hh, mm)| {
            char(':')
                .chain(|_| two_digits())
                .chain(|ss| {
                    millis().option().map(move |ms| match ms {
                        Some(ms) => format!("{ss}.{ms}").parse::<f64>().unwrap_or_default(),
                        None => f64::from(ss),
                    })
                })
                .map(move |secs| Time(hh, mm, secs))
        })
}

/// Comma separated times between braces, e.g. `{01:02:03.345, 23:02:03}`.
pub fn time_array<'a>() -> impl Parser<'a, Output = Vec<Time>> {
    let ws = || like(char::is_whitespace).star();
    char('{')
        .chain(move |_| ws())
        .chain(move |_| {
            let next = move || {
                char(',').chain(move |_| ws()).chain(|_| time()).chain(move |t| ws().map(move |_| t))
            };
            time()
                .chain(move |first| ws().map(move |_| first))
                .chain(move |first| {
                    next().star().map(move |mut rest| {
                        rest.insert(0, first);
                        rest
                    })
                })
                .option()
                .map(Option::unwrap_or_default)
        })
        .chain(|times| char('}').map(move |_| times.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_time() {
        let o = run(&time(), "23:59:13.234");
        assert_eq!(o.value(), Some(&Time(23, 59, 13.234)));
        assert_eq!(o.remaining(), Some(""));

        let o = run(&time(), "23:59:13Hello");
        assert_eq!(o.value(), Some(&Time(23, 59, 13.0)));
        assert_eq!(o.remaining(), Some("Hello"));

        assert!(run(&time(), "23:X:13.234").is_failure());
        assert!(run(&time(), "2:59:13").is_failure());
    }

    #[test]
    fn test_partial_millis_are_left_unparsed() {
        // ".2" is not three digits, so the option matches nothing
        let o = run(&time(), "10:00:00.2");
        assert_eq!(o.value(), Some(&Time(10, 0, 0.0)));
        assert_eq!(o.remaining(), Some(".2"));
    }

    #[test]
    fn test_time_array() {
        let o = run(&time_array(), "{01:02:03.345, 02:02:03.346, 23:02:03}");
        let times = o.into_value().unwrap();
        assert_eq!(times.len(), 3);
        assert_eq!(times[0], Time(1, 2, 3.345));
        assert_eq!(times[2], Time(23, 2, 3.0));

        assert_eq!(run(&time_array(), "{ }").into_value(), Some(vec![]));
        assert!(run(&time_array(), "{01:02:03,}").is_failure());
    }
}
