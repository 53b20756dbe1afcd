/*!
# Cookbook

Worked examples, each chapter a small grammar with its tests.

Parsers are values. Small parsers for constituent pieces are composed into
parsers for bigger structures, and the finished parser is run with
[`run`](crate::run):

```
use tinycomb::prelude::*;

let yes_or_no = str("yes").map(|_| true).or(str("no").map(|_| false));
assert_eq!(run(&yes_or_no, "no").into_value(), Some(false));
```

- [ch_1_getting_started]: the primitives and the driver
- [ch_2_composition]: sequencing, choice, repetition and options
- [ch_3_enum_strum]: parsing enum variants by name with `strum`
- [ch_4_recursion]: recursive grammars with `lazy`

# Testing

For tests during development of your parsers a logging framework for the
test harness is encouraged

```toml
[dev-dependencies]
env_logger = "0.10"
test-log = {version = "0.2"}
```

This will allow the action of parsing to be traced with
```sh
RUST_LOG=tc=trace cargo test --features cookbook mytest -- --nocapture
```
*/

pub mod ch_1_getting_started;
pub mod ch_2_composition;
pub mod ch_3_enum_strum;
pub mod ch_4_recursion;
