use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::{f64_to_decimal, format_number};
use crate::core::types::ChartKind;
use crate::error::ChartResult;

/// Upper bound on expanded numeric ranges; longer ranges are truncated.
pub const MAX_EXPANDED_TICKS: usize = 10_000;

/// Declared tick values of an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickSpec {
    /// Explicit ordered labels, used verbatim.
    Custom(Vec<String>),
    /// Inclusive stepped range.
    Numeric(NumericTickRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericTickRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Value on the perpendicular axis where this axis crosses it when
    /// placed `CUSTOM`.
    #[serde(default)]
    pub break_axis_value: Option<f64>,
}

impl NumericTickRange {
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            break_axis_value: None,
        }
    }

    #[must_use]
    pub fn with_break_axis_value(mut self, value: f64) -> Self {
        self.break_axis_value = Some(value);
        self
    }
}

impl TickSpec {
    #[must_use]
    pub fn custom<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Custom(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn numeric(min: f64, max: f64, step: f64) -> Self {
        Self::Numeric(NumericTickRange::new(min, max, step))
    }

    #[must_use]
    pub fn break_axis_value(&self) -> Option<f64> {
        match self {
            Self::Numeric(range) => range.break_axis_value,
            Self::Custom(_) => None,
        }
    }
}

/// Expands a tick specification into ordered labels.
#[must_use]
pub fn expand_tick_values(spec: &TickSpec, kind: ChartKind) -> Vec<String> {
    match spec {
        TickSpec::Custom(values) => values.clone(),
        TickSpec::Numeric(range) => expand_numeric_range(*range, kind),
    }
}

/// Steps from `min` to `max` inclusive.
///
/// A non-positive step, or one at least as wide as the range, collapses to
/// `[min]` for bar charts and `[min, max]` for line charts. Values are
/// accumulated with plain float addition, so non-integral steps may drift.
#[must_use]
pub fn expand_numeric_range(range: NumericTickRange, kind: ChartKind) -> Vec<String> {
    let NumericTickRange { min, max, step, .. } = range;
    if !min.is_finite() || !max.is_finite() || !step.is_finite() {
        return Vec::new();
    }

    if step <= 0.0 || step >= (max - min).abs() {
        return match kind {
            ChartKind::Bar => vec![format_number(min)],
            ChartKind::Line => vec![format_number(min), format_number(max)],
        };
    }

    let mut values = Vec::new();
    let mut current = min;
    while current <= max {
        if values.len() == MAX_EXPANDED_TICKS {
            warn!(min, max, step, "numeric tick range truncated");
            break;
        }
        values.push(format_number(current));
        current += step;
    }
    values
}

/// Derives human-friendly labels covering `[min, max]` and zero.
///
/// The step is the 1-2-5 ladder value at or above `span / target_count`;
/// bounds snap outward to step multiples. At most `MAX_EXPANDED_TICKS`
/// labels are produced.
#[must_use]
pub fn nice_tick_values(min: f64, max: f64, target_count: usize) -> Vec<String> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    let low = min.min(0.0);
    let high = max.max(0.0);
    let span = high - low;
    if span <= 0.0 {
        return vec![format_number(low)];
    }

    let step = nice_step(span / target_count.max(1) as f64);
    let start = (low / step).floor() * step;
    let end = (high / step).ceil() * step;
    let mut count = ((end - start) / step).round() as usize;
    if count >= MAX_EXPANDED_TICKS {
        warn!(min, max, target_count, "derived tick range truncated");
        count = MAX_EXPANDED_TICKS - 1;
    }

    decimal_ladder(start, step, count).unwrap_or_else(|_| {
        (0..=count)
            .map(|index| format_number(start + step * index as f64))
            .collect()
    })
}

fn decimal_ladder(start: f64, step: f64, count: usize) -> ChartResult<Vec<String>> {
    let start = f64_to_decimal(start, "tick start")?;
    let step = f64_to_decimal(step, "tick step")?;
    Ok((0..=count)
        .map(|index| {
            (start + step * Decimal::from(index))
                .normalize()
                .to_string()
        })
        .collect())
}

pub(crate) fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / base;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * base
}
