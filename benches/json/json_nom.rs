use std::collections::HashMap;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0},
    combinator::{eof, map, value},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, preceded, separated_pair, terminated},
    IResult,
};

use crate::JsonValue;

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    terminated(inner, multispace0)
}

fn string(i: &str) -> IResult<&str, String> {
    ws(map(
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        String::from,
    ))(i)
}

fn array(i: &str) -> IResult<&str, Vec<JsonValue>> {
    preceded(
        ws(char('[')),
        terminated(separated_list0(ws(char(',')), json_value), ws(char(']'))),
    )(i)
}

fn key_value(i: &str) -> IResult<&str, (String, JsonValue)> {
    separated_pair(string, ws(char(':')), json_value)(i)
}

fn hash(i: &str) -> IResult<&str, HashMap<String, JsonValue>> {
    map(
        preceded(
            ws(char('{')),
            terminated(separated_list0(ws(char(',')), key_value), ws(char('}'))),
        ),
        |kvs| kvs.into_iter().collect(),
    )(i)
}

fn json_value(i: &str) -> IResult<&str, JsonValue> {
    alt((
        map(hash, JsonValue::Object),
        map(array, JsonValue::Array),
        map(string, JsonValue::Str),
        map(ws(double), JsonValue::Num),
        value(JsonValue::Boolean(true), ws(tag("true"))),
        value(JsonValue::Boolean(false), ws(tag("false"))),
        value(JsonValue::Null, ws(tag("null"))),
    ))(i)
}

pub fn nom_parser(s: &str) -> Option<JsonValue> {
    delimited(multispace0, json_value, eof)(s)
        .ok()
        .map(|(_, v)| v)
}
