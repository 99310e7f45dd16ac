use serde::{Deserialize, Serialize};

use crate::core::tick_positions::TickPoint;
use crate::core::types::DataValue;

/// How raw values are located in a tick sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointLookup {
    /// Label must equal a tick value.
    #[default]
    Exact,
    /// Exact labels win; numeric values between two numeric ticks are
    /// interpolated linearly.
    Interpolated,
}

/// Maps each raw value to its pixel position; unmatched values map to `NaN`.
#[must_use]
pub fn map_points(ticks: &[TickPoint], values: &[DataValue], lookup: PointLookup) -> Vec<f64> {
    values
        .iter()
        .map(|value| map_value(ticks, value, lookup))
        .collect()
}

#[must_use]
pub fn map_value(ticks: &[TickPoint], value: &DataValue, lookup: PointLookup) -> f64 {
    let label = value.to_label();
    if let Some(tick) = ticks.iter().find(|tick| tick.value == label) {
        return tick.position;
    }

    match (lookup, value.as_f64()) {
        (PointLookup::Interpolated, Some(number)) => interpolate(ticks, number),
        _ => f64::NAN,
    }
}

#[must_use]
pub fn map_number(ticks: &[TickPoint], value: f64, lookup: PointLookup) -> f64 {
    map_value(ticks, &DataValue::Number(value), lookup)
}

fn interpolate(ticks: &[TickPoint], value: f64) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }

    let mut numeric = Vec::with_capacity(ticks.len());
    for tick in ticks {
        match tick.value.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => numeric.push((parsed, tick.position)),
            _ => return f64::NAN,
        }
    }

    for pair in numeric.windows(2) {
        let (low_value, low_px) = pair[0];
        let (high_value, high_px) = pair[1];
        let (min, max) = if low_value <= high_value {
            (low_value, high_value)
        } else {
            (high_value, low_value)
        };
        if value < min || value > max {
            continue;
        }
        if high_value == low_value {
            return low_px;
        }
        let ratio = (value - low_value) / (high_value - low_value);
        return low_px + ratio * (high_px - low_px);
    }

    f64::NAN
}
