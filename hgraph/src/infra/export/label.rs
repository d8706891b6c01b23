//! Built-in strategies turning a weight into the text of a node name.
//!
//! The numeric strategies follow C `printf` conventions: [`unsigned`] is
//! `%u`, [`float`] is `%f` and [`double`] is `%lf`. The weight is converted
//! with an `as` cast, so any primitive numeric type works with any of them.

use std::fmt::Display;

use num_traits::AsPrimitive;

pub fn unsigned<W: AsPrimitive<u64>>(weight: &W) -> String {
    let value: u64 = (*weight).as_();
    value.to_string()
}

pub fn float<W: AsPrimitive<f32>>(weight: &W) -> String {
    let value: f32 = (*weight).as_();
    format!("{value:.6}")
}

pub fn double<W: AsPrimitive<f64>>(weight: &W) -> String {
    let value: f64 = (*weight).as_();
    format!("{value:.6}")
}

pub fn display<W: Display>(weight: &W) -> String {
    weight.to_string()
}
