use serde::{Deserialize, Serialize};

use crate::core::Transform;

/// Horizontal grid position on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub pixel_y: f64,
}

/// Label slot on the x axis, anchored to a sample index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexTick {
    pub index: usize,
    pub value: f64,
    pub pixel_x: f64,
}

/// Rounds `span / slots` to one significant digit (`276 -> 300`, `0.042 -> 0.04`).
#[must_use]
pub fn nice_step(span: f64, slots: usize) -> Option<f64> {
    if slots == 0 || !span.is_finite() || span <= 0.0 {
        return None;
    }
    let raw = span / slots as f64;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let step = (raw / magnitude).round() * magnitude;
    (step.is_finite() && step > 0.0).then_some(step)
}

/// Grid values in `[min_y, max_y)` spaced by [`nice_step`] and aligned to
/// multiples of the step, so zero is always on the grid when in range.
#[must_use]
pub fn value_ticks(transform: &Transform, slots: usize) -> Vec<ValueTick> {
    let Some(step) = nice_step(transform.max_y - transform.min_y, slots) else {
        return Vec::new();
    };

    let mut multiple = (transform.min_y / step).round();
    if multiple * step < transform.min_y {
        multiple += 1.0;
    }

    // Rounding the step can shrink it to half the raw step at most.
    let cap = slots * 3 + 1;
    (0..cap)
        .map(|k| (multiple + k as f64) * step)
        .take_while(|value| *value < transform.max_y)
        .map(|value| ValueTick {
            value,
            pixel_y: transform.y_to_pixel(value),
        })
        .collect()
}

/// `slots` evenly spaced sample indices starting at `begin`, excluding `end`.
#[must_use]
pub fn index_ticks(transform: &Transform, x_values: &[f64], slots: usize) -> Vec<IndexTick> {
    if slots == 0 || transform.end <= transform.begin || transform.end >= x_values.len() {
        return Vec::new();
    }
    let step = ((transform.end - transform.begin) / slots).max(1);
    (transform.begin..transform.end)
        .step_by(step)
        .map(|index| IndexTick {
            index,
            value: x_values[index],
            pixel_x: transform.x_to_pixel(x_values[index]),
        })
        .collect()
}
