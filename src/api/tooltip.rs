use serde::{Deserialize, Serialize};

use crate::core::SeriesId;
use crate::render::{Color, Renderer};

use super::ChartEngine;

/// Gap between the hover ruler and the tooltip box.
pub const TOOLTIP_GAP_PX: f64 = 15.0;

/// One row of the tooltip: a visible series at the hovered sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub id: SeriesId,
    pub label: String,
    pub color: Color,
    pub value: f64,
}

/// Content of the hover tooltip. Text formatting is left to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub x_value: f64,
    /// Main-view pixel column of the hovered sample.
    pub anchor_x: f64,
    pub entries: Vec<TooltipEntry>,
}

/// Horizontal position of a tooltip box inside the main view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TooltipPlacement {
    /// Box starts `left_px` from the left edge of the view.
    Left { left_px: f64 },
    /// Box ends `right_px` from the right edge of the view.
    Right { right_px: f64 },
}

impl Tooltip {
    /// Places a box of `width_px` right of the anchor, flipping it to the
    /// left of the anchor when it would overflow `view_width`.
    #[must_use]
    pub fn placement(&self, width_px: f64, view_width: f64) -> TooltipPlacement {
        let left_px = self.anchor_x + TOOLTIP_GAP_PX;
        if left_px + width_px <= view_width {
            TooltipPlacement::Left { left_px }
        } else {
            TooltipPlacement::Right {
                right_px: view_width - left_px + 2.0 * TOOLTIP_GAP_PX,
            }
        }
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Tooltip for the hovered sample, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.tooltip_at(self.hover.index()?)
    }

    /// Tooltip content for `index` with entries for visible series only, in
    /// dataset order. Anchored with the transform currently on screen.
    #[must_use]
    pub fn tooltip_at(&self, index: usize) -> Option<Tooltip> {
        let chart = self.chart.as_ref()?;
        if chart.range.visible().is_empty() {
            return None;
        }
        let transform = self.main_animator.last_rendered()?;
        let x_value = *chart.dataset.x_values().get(index)?;

        let entries = chart
            .dataset
            .series()
            .iter()
            .filter(|series| chart.range.visible().contains(series.id.as_str()))
            .filter_map(|series| {
                Some(TooltipEntry {
                    id: series.id.clone(),
                    label: series.label.clone(),
                    color: series.color,
                    value: *series.values.get(index)?,
                })
            })
            .collect();

        Some(Tooltip {
            index,
            x_value,
            anchor_x: transform.x_to_pixel(x_value),
            entries,
        })
    }
}
