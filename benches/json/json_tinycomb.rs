use tinycomb::contrib::{token, whitespace};
use tinycomb::prelude::*;

use crate::JsonValue;

pub fn tinycomb_parser(s: &str) -> Option<JsonValue> {
    let root = whitespace()
        .chain(|_| value())
        .chain(|v| end().map(move |_| v.clone()));
    run(&root, s).into_value()
}

fn string<'a>() -> impl Parser<'a, Output = String> + Clone {
    token(
        char('"')
            .chain(|_| like(|c| c != '"').star())
            .chain(|cs| char('"').map(move |_| cs.iter().collect::<String>())),
    )
}

fn number<'a>() -> impl Parser<'a, Output = JsonValue> + Clone {
    token(one_of("-+.eE0123456789").plus()).chain(|cs| {
        let n = cs.iter().collect::<String>().parse::<f64>().ok();
        move |c: Cursor<'a>| match n {
            Some(n) => Outcome::success(c, JsonValue::Num(n)),
            None => Outcome::Failure,
        }
    })
}

fn literal<'a>(word: &str, v: JsonValue) -> impl Parser<'a, Output = JsonValue> + Clone {
    token(str(word)).map(move |_| v.clone())
}

/// Zero or more `item`s separated by `sep`.
fn separated<'a, P>(item: P, sep: char) -> impl Parser<'a, Output = Vec<P::Output>> + Clone
where
    P: Parser<'a> + Clone,
    P::Output: Clone,
{
    let next = item.clone();
    let rest = token(char(sep)).chain(move |_| next.clone()).star();
    item.chain(move |first| {
        rest.clone().map(move |mut tail| {
            tail.insert(0, first.clone());
            tail
        })
    })
    .option()
    .map(Option::unwrap_or_default)
}

fn key_value<'a>() -> impl Parser<'a, Output = (String, JsonValue)> + Clone {
    string().chain(|k| {
        token(char(':'))
            .chain(|_| lazy(value))
            .map(move |v| (k.clone(), v))
    })
}

fn value<'a>() -> BoxedParser<'a, JsonValue> {
    let object = token(char('{'))
        .chain(|_| separated(key_value(), ','))
        .chain(|kvs| {
            token(char('}')).map(move |_| JsonValue::Object(kvs.iter().cloned().collect()))
        });
    let array = token(char('['))
        .chain(|_| separated(lazy(value), ','))
        .chain(|vs| token(char(']')).map(move |_| JsonValue::Array(vs.clone())));
    named(
        "json",
        object
            .or(array)
            .or(string().map(JsonValue::Str))
            .or(number())
            .or(literal("true", JsonValue::Boolean(true)))
            .or(literal("false", JsonValue::Boolean(false)))
            .or(literal("null", JsonValue::Null)),
    )
    .boxed()
}
