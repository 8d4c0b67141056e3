use tracing::{debug, trace};

use crate::core::{DragTarget, nearest_index_within};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::interaction::{DragLimits, PointerEvent, PointerPhase, Surface, resolve_drag_window};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Routes one pointer or touch sample.
    ///
    /// Coordinates are drawing-surface pixels. While a preview gesture is
    /// active it captures every move, release and cancel whatever the
    /// surface. Otherwise presses on the preview start gestures, main-view
    /// presses and moves hover, and a leave on the main view clears the
    /// hover. Events outside the addressed view are ignored.
    pub fn on_pointer_event(&mut self, surface: Surface, event: PointerEvent) -> ChartResult<()> {
        if self.chart.is_none() {
            return Ok(());
        }
        if !event.is_finite() {
            trace!(?surface, "non-finite pointer event ignored");
            return Ok(());
        }

        if self.gesture.is_active() {
            return match event.phase {
                PointerPhase::Move => self.continue_preview_gesture(event.x),
                PointerPhase::Up => self.end_preview_gesture(Some(event.x)),
                PointerPhase::Cancel => self.end_preview_gesture(None),
                PointerPhase::Down | PointerPhase::Leave => Ok(()),
            };
        }

        match (surface, event.phase) {
            (Surface::Preview, PointerPhase::Down) => {
                if self.layout.preview.contains(event.x, event.y) {
                    self.begin_preview_gesture(event.x);
                }
                Ok(())
            }
            (Surface::Main, PointerPhase::Down | PointerPhase::Move) => {
                if self.layout.main.contains(event.x, event.y) {
                    self.hover_at(event.x)?;
                }
                Ok(())
            }
            (Surface::Main, PointerPhase::Leave) => self.hover_leave(),
            _ => Ok(()),
        }
    }

    /// Sample index under a main-view pixel column, limited to the window
    /// currently on screen. `None` while the surface is cleared.
    #[must_use]
    pub fn index_at_main_pixel(&self, pixel_x: f64) -> Option<usize> {
        let chart = self.chart.as_ref()?;
        if chart.range.visible().is_empty() {
            return None;
        }
        let transform = self.main_animator.last_rendered()?;
        nearest_index_within(
            chart.dataset.x_values(),
            transform.pixel_to_x(pixel_x),
            transform.begin,
            transform.end,
        )
    }

    /// Hovers the sample nearest to `pixel_x`. Repeated hits on the same
    /// sample do nothing.
    pub fn hover_at(&mut self, pixel_x: f64) -> ChartResult<()> {
        if self.chart.is_none() {
            return Err(ChartError::NoDataset);
        }
        let Some(index) = self.index_at_main_pixel(pixel_x) else {
            return Ok(());
        };
        if !self.hover.update(index) {
            return Ok(());
        }

        trace!(index, "hover index changed");
        self.emit_chart_event(ChartEvent::HoverIndexChanged { index });
        self.render_current()
    }

    pub fn hover_leave(&mut self) -> ChartResult<()> {
        if !self.hover.clear() {
            return Ok(());
        }
        self.emit_chart_event(ChartEvent::HoverCleared);
        self.render_current()
    }

    fn begin_preview_gesture(&mut self, x: f64) {
        let Some(frame) = self.preview_frame() else {
            return;
        };
        let Some(target) = frame.hit_test(x, self.config.handle_hit_px) else {
            return;
        };

        self.gesture.press(x, target);
        debug!(?target, x, "preview gesture started");
        self.emit_chart_event(ChartEvent::GestureStarted { target });
    }

    fn continue_preview_gesture(&mut self, x: f64) -> ChartResult<()> {
        let Some(target) = self.gesture.mode().drag_target() else {
            return Ok(());
        };
        self.drag_preview_to(target, x)
    }

    /// Applies the last position of a release (if any), then drops capture.
    fn end_preview_gesture(&mut self, x: Option<f64>) -> ChartResult<()> {
        let result = match (x, self.gesture.mode().drag_target()) {
            (Some(x), Some(target)) => self.drag_preview_to(target, x),
            _ => Ok(()),
        };

        self.gesture.release();
        debug!("preview gesture ended");
        self.emit_chart_event(ChartEvent::GestureEnded);
        result
    }

    fn drag_preview_to(&mut self, target: DragTarget, x: f64) -> ChartResult<()> {
        let area = self.layout.preview;
        let min_window_len = self.config.min_window_len;
        let limits = DragLimits {
            left: 0.0,
            right: area.width,
            min_frame_width: area.width * self.config.min_frame_width_ratio,
        };

        let Some(chart) = self.chart.as_mut() else {
            return Ok(());
        };
        let current = chart.range.preview_frame();
        let Some(frame) = self.gesture.drag_to(x, current, limits) else {
            return Ok(());
        };

        let mapping = chart.preview_mapping(area.width)?;
        let Some(window) = resolve_drag_window(
            target,
            frame,
            chart.range.window(),
            chart.dataset.x_values(),
            mapping,
            min_window_len,
        ) else {
            trace!(?target, "drag would make the window too narrow, move refused");
            return Ok(());
        };

        // Sub-sample moves update the cached frame only; it shows on the next
        // redraw.
        if !chart.range.apply_drag(frame, window) {
            return Ok(());
        }
        self.after_range_changed()
    }
}
