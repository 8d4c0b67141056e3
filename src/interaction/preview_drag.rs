use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DragTarget, HorizontalMapping, PreviewFrame, RangeWindow, nearest_index};

use super::InteractionMode;

/// Pixel constraints of the preview strip for one drag step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragLimits {
    pub left: f64,
    pub right: f64,
    pub min_frame_width: f64,
}

/// Press → move* → release machine for the preview strip.
///
/// While a gesture is active the engine routes every move/release to it,
/// regardless of which surface reported the event; releasing or cancelling
/// returns to `Idle` and ends that capture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PreviewGesture {
    mode: InteractionMode,
    last_x: f64,
}

impl PreviewGesture {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.mode != InteractionMode::Idle
    }

    pub fn press(&mut self, x: f64, target: DragTarget) {
        self.mode = InteractionMode::dragging(target);
        self.last_x = x;
    }

    pub fn release(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    /// Applies the pointer delta since the previous move to `frame`.
    ///
    /// Edges are kept inside the strip. Returns `None` when idle, when nothing
    /// moved, or when the frame would become narrower than the limit (which
    /// also covers an edge crossing the opposite one).
    pub fn drag_to(&mut self, x: f64, frame: PreviewFrame, limits: DragLimits) -> Option<PreviewFrame> {
        let target = self.mode.drag_target()?;
        let delta = x - self.last_x;
        self.last_x = x;

        let moved = match target {
            DragTarget::BeginHandle => {
                let x0 = (frame.x0 + delta).clamp(limits.left, limits.right);
                PreviewFrame::new(x0, frame.x1)
            }
            DragTarget::EndHandle => {
                let x1 = (frame.x1 + delta).clamp(limits.left, limits.right);
                PreviewFrame::new(frame.x0, x1)
            }
            DragTarget::Frame => {
                let shift = delta
                    .max(limits.left - frame.x0)
                    .min(limits.right - frame.x1);
                PreviewFrame::new(frame.x0 + shift, frame.x1 + shift)
            }
        };

        if moved == frame {
            return None;
        }
        if moved.width() < limits.min_frame_width {
            trace!(
                width = moved.width(),
                min = limits.min_frame_width,
                "preview frame too narrow, move refused"
            );
            return None;
        }
        Some(moved)
    }
}

/// Converts a dragged preview frame back into an index window.
///
/// Edge drags move one index and keep the other; frame drags keep the
/// window length. Returns `None` when the result would be narrower than
/// `min_len` samples.
#[must_use]
pub fn resolve_drag_window(
    target: DragTarget,
    frame: PreviewFrame,
    current: RangeWindow,
    x_values: &[f64],
    mapping: HorizontalMapping,
    min_len: usize,
) -> Option<RangeWindow> {
    let total = x_values.len().checked_sub(1)?;
    let index_at = |pixel: f64| nearest_index(x_values, mapping.pixel_to_x(pixel));

    let window = match target {
        DragTarget::BeginHandle => RangeWindow {
            begin: index_at(frame.x0)?,
            end: current.end,
        },
        DragTarget::EndHandle => RangeWindow {
            begin: current.begin,
            end: index_at(frame.x1)?,
        },
        DragTarget::Frame => {
            let len = current.len();
            let begin = index_at(frame.x0)?.min(total - len);
            RangeWindow {
                begin,
                end: begin + len,
            }
        }
    };

    if window.end <= window.begin || window.len() < min_len.min(total) {
        return None;
    }
    Some(window)
}
