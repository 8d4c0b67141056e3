use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::HorizontalMapping;

/// Inclusive index window shown by the main view.
///
/// Invariant: `begin < end <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeWindow {
    pub begin: usize,
    pub end: usize,
}

impl RangeWindow {
    /// The last quarter of the data: `[total - total / 4, total]`.
    #[must_use]
    pub fn initial(total: usize, min_len: usize) -> Self {
        Self::clamped(total - total / 4, total, total, min_len)
    }

    /// Clamps a requested window into `[0, total]`.
    ///
    /// Windows narrower than `min_len` (including `begin >= end`) grow to the
    /// right from `begin`, shifting left when they would pass `total`.
    #[must_use]
    pub fn clamped(begin: usize, end: usize, total: usize, min_len: usize) -> Self {
        let min_len = min_len.clamp(1, total.max(1));
        let mut begin = begin.min(total);
        let mut end = end.min(total);
        if end < begin + min_len {
            end = (begin + min_len).min(total);
            begin = end - min_len;
        }
        Self { begin, end }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.begin
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.end == self.begin
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.begin..=self.end).contains(&index)
    }
}

/// What a press on the preview strip grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    BeginHandle,
    EndHandle,
    Frame,
}

/// Pixel span of the range window on the preview strip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PreviewFrame {
    pub x0: f64,
    pub x1: f64,
}

impl PreviewFrame {
    #[must_use]
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }

    /// Projects `window` through the preview's x mapping.
    #[must_use]
    pub fn project(window: RangeWindow, x_values: &[f64], mapping: HorizontalMapping) -> Self {
        Self {
            x0: mapping.x_to_pixel(x_values[window.begin]),
            x1: mapping.x_to_pixel(x_values[window.end]),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    /// Resolves a press at `x`. Edges win over the interior; when both edges
    /// are within `threshold_px` the closer one wins, the begin edge on a tie.
    #[must_use]
    pub fn hit_test(self, x: f64, threshold_px: f64) -> Option<DragTarget> {
        let mut edges: SmallVec<[(OrderedFloat<f64>, DragTarget); 2]> = SmallVec::new();
        for (edge, target) in [
            (self.x0, DragTarget::BeginHandle),
            (self.x1, DragTarget::EndHandle),
        ] {
            let distance = (x - edge).abs();
            if distance <= threshold_px {
                edges.push((OrderedFloat(distance), target));
            }
        }

        // `min_by_key` keeps the first minimum, so the begin edge wins ties.
        edges
            .into_iter()
            .min_by_key(|item| item.0)
            .map(|(_, target)| target)
            .or_else(|| (self.x0 < x && x < self.x1).then_some(DragTarget::Frame))
    }
}
