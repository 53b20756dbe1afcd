mod json_nom;
mod json_tinycomb;

use std::collections::HashMap;

use criterion::{black_box, criterion_group, Criterion};
use json_nom::nom_parser;
use json_tinycomb::tinycomb_parser;
use log::trace;

const JSON: &str = "  { \"a\"\t: 42,
  \"b\": [ \"x\", \"y\", 12 ] ,
  \"c\": { \"hello\" : \"world\"
  }
  } ";

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Str(String),
    Boolean(bool),
    Num(f64),
    Array(Vec<JsonValue>),
    Object(HashMap<String, JsonValue>),
}

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("json_nom", |b| b.iter(|| nom_parser(black_box(JSON))));
}

pub fn bench_tinycomb(c: &mut Criterion) {
    c.bench_function("json_tinycomb", |b| {
        b.iter(|| tinycomb_parser(black_box(JSON)))
    });
}

criterion_group!(benches, bench_nom, bench_tinycomb);

fn main() {
    env_logger::init();
    trace!(target: "tc", "Logging enabled");
    assert_eq!(nom_parser(JSON), tinycomb_parser(JSON));
    benches();
    Criterion::default().configure_from_args().final_summary();
}
