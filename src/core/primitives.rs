use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::{ChartError, ChartResult};

/// Formats a number the way tick labels and path commands expect:
/// integral values carry no fractional part and negative zero prints as `0`.
/// Magnitudes outside `[1e-6, 1e21)` use exponent form with an explicit
/// sign, e.g. `1e+21` and `1e-7`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

pub fn f64_to_decimal(value: f64, field_name: &str) -> ChartResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as decimal"))
    })
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_print_without_fraction() {
        assert_eq!(format_number(250.0), "250");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn extreme_magnitudes_use_signed_exponents() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-8), "1.5e-8");
    }

    #[test]
    fn fractional_and_non_finite_values_are_preserved() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
