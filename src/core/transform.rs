use serde::{Deserialize, Serialize};

use crate::core::{Dataset, PlotArea, VisibleSet};
use crate::error::{ChartError, ChartResult};

/// Affine x mapping of one view: `pixel = x * ratio + offset`.
///
/// Depends only on the x-series and the view width, so it stays available
/// even when no series is visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalMapping {
    pub ratio: f64,
    pub offset: f64,
}

impl HorizontalMapping {
    /// Maps `x_values[begin]..=x_values[end]` onto `0..=width`.
    pub fn for_window(x_values: &[f64], begin: usize, end: usize, width: f64) -> ChartResult<Self> {
        validate_window(x_values.len(), begin, end)?;
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "view width must be finite and > 0".to_owned(),
            ));
        }

        let ratio = width / (x_values[end] - x_values[begin]);
        Ok(Self {
            ratio,
            offset: -x_values[begin] * ratio,
        })
    }

    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> f64 {
        x * self.ratio + self.offset
    }

    #[must_use]
    pub fn pixel_to_x(self, pixel: f64) -> f64 {
        (pixel - self.offset) / self.ratio
    }
}

/// Data → pixel mapping for one view over one index window.
///
/// Y is inverted (`y_ratio < 0`) because surface rows grow downward. The
/// value range always contains zero so the baseline stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub x_ratio: f64,
    pub y_ratio: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    /// Decimation stride: one plotted sample per `x_step` indices.
    pub x_step: usize,
    pub begin: usize,
    pub end: usize,
}

impl Transform {
    /// Computes the transform for `[begin, end]` drawn into `area`.
    ///
    /// Returns `Ok(None)` when nothing is visible; callers clear the view and
    /// skip drawing.
    pub fn compute(
        dataset: &Dataset,
        visible: &VisibleSet,
        begin: usize,
        end: usize,
        area: PlotArea,
    ) -> ChartResult<Option<Self>> {
        if visible.is_empty() {
            return Ok(None);
        }
        if !area.height.is_finite() || area.height <= 0.0 || !area.top.is_finite() {
            return Err(ChartError::InvalidData(
                "view height must be finite and > 0".to_owned(),
            ));
        }

        let x_values = dataset.x_values();
        let horizontal = HorizontalMapping::for_window(x_values, begin, end, area.width)?;

        let mut min_y = 0.0_f64;
        let mut max_y = 0.0_f64;
        for series in dataset
            .series()
            .iter()
            .filter(|series| visible.contains(series.id.as_str()))
        {
            for value in &series.values[begin..=end] {
                min_y = min_y.min(*value);
                max_y = max_y.max(*value);
            }
        }
        if max_y == min_y {
            // All visible samples sit on the baseline.
            max_y = 1.0;
        }

        let y_ratio = -area.height / (max_y - min_y);
        Ok(Some(Self {
            min_x: x_values[begin],
            max_x: x_values[end],
            min_y,
            max_y,
            x_ratio: horizontal.ratio,
            y_ratio,
            x_offset: horizontal.offset,
            y_offset: -max_y * y_ratio + area.top,
            x_step: decimation_stride(begin, end, area.width),
            begin,
            end,
        }))
    }

    #[must_use]
    pub fn horizontal(&self) -> HorizontalMapping {
        HorizontalMapping {
            ratio: self.x_ratio,
            offset: self.x_offset,
        }
    }

    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_to_pixel(x), self.y_to_pixel(y))
    }

    #[must_use]
    pub fn to_data(&self, px: f64, py: f64) -> (f64, f64) {
        (self.pixel_to_x(px), self.pixel_to_y(py))
    }

    #[must_use]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        x * self.x_ratio + self.x_offset
    }

    #[must_use]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        y * self.y_ratio + self.y_offset
    }

    #[must_use]
    pub fn pixel_to_x(&self, px: f64) -> f64 {
        (px - self.x_offset) / self.x_ratio
    }

    #[must_use]
    pub fn pixel_to_y(&self, py: f64) -> f64 {
        (py - self.y_offset) / self.y_ratio
    }

    /// Sample indices to plot: `begin`, every `x_step`-th index after it and
    /// always `end`.
    pub fn plotted_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let step = self.x_step.max(1);
        let last_stepped = self.begin + (self.end - self.begin) / step * step;
        (self.begin..=self.end)
            .step_by(step)
            .chain((last_stepped != self.end).then_some(self.end))
    }
}

/// `max(1, floor((end - begin) / width))`.
#[must_use]
pub fn decimation_stride(begin: usize, end: usize, width: f64) -> usize {
    let span = end.saturating_sub(begin) as f64;
    let stride = (span / width).floor();
    if stride.is_finite() && stride >= 1.0 {
        stride as usize
    } else {
        1
    }
}

fn validate_window(len: usize, begin: usize, end: usize) -> ChartResult<()> {
    if begin >= end || end >= len {
        return Err(ChartError::InvalidData(format!(
            "index window [{begin}, {end}] is invalid for {len} samples"
        )));
    }
    Ok(())
}
