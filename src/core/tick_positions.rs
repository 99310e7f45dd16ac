use serde::{Deserialize, Serialize};

/// Labeled tick at a pixel position along its axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPoint {
    pub position: f64,
    pub value: String,
}

impl TickPoint {
    #[must_use]
    pub fn new(position: f64, value: impl Into<String>) -> Self {
        Self {
            position,
            value: value.into(),
        }
    }
}

/// Distributes tick values linearly from `start` to `end`.
///
/// X axes pass `start < end`; Y axes pass the bottom pixel as `start` so the
/// first value lands lowest on screen. A single value collapses onto
/// `start`. The last tick is pinned to `end` exactly.
#[must_use]
pub fn resolve_tick_positions(values: &[String], start: f64, end: f64) -> Vec<TickPoint> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![TickPoint::new(start, values[0].clone())],
        count => {
            let last = count - 1;
            let denominator = last as f64;
            values
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    let position = if index == last {
                        end
                    } else {
                        start + index as f64 * (end - start) / denominator
                    };
                    TickPoint::new(position, value.clone())
                })
                .collect()
        }
    }
}
