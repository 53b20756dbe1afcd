use std::str::FromStr;

use crate::prelude::*;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

// Example using strum crate.
//
// strum gives us
//   derive(EnumVariantNames) + trait strum::VariantNames => FancyColor::VARIANTS
//   derive(EnumString) + trait FromStr => FancyColor::from_str
// the parser tries each name in VARIANTS, then converts with FromStr.
//
// Alternation is ordered, so a name that is a prefix of a later one (say
// "Lime" before "LimeGreen") wins. List longer names first.

#[derive(PartialEq, Debug, Clone, Copy, EnumVariantNames, EnumString)]
pub enum FancyColor {
    Burgundy,
    Azure,
    Lime,
}

/// The first of `names` found at the cursor.
fn any_of<'a>(names: &'static [&'static str]) -> impl Parser<'a, Output = String> {
    move |c: Cursor<'a>| {
        names
            .iter()
            .map(|name| str(name).run(c))
            .find(Outcome::is_success)
            .unwrap_or(Outcome::Failure)
    }
}

pub fn fancy_color<'a>() -> impl Parser<'a, Output = FancyColor> {
    any_of(FancyColor::VARIANTS).chain(|name| {
        let color = FancyColor::from_str(&name).ok();
        move |c: Cursor<'a>| match color {
            Some(color) => Outcome::success(c, color),
            None => Outcome::Failure,
        }
    })
}
