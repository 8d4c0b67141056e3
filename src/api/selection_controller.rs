use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Sets the main-view window. Out-of-range and inverted requests are
    /// clamped, never rejected.
    pub fn set_range(&mut self, begin: usize, end: usize) -> ChartResult<()> {
        let chart = self.chart.as_mut().ok_or(ChartError::NoDataset)?;
        if !chart.range.set_range(begin, end) {
            return Ok(());
        }
        self.sync_preview_frame()?;
        self.after_range_changed()
    }

    /// Shows or hides one series.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> ChartResult<()> {
        let chart = self.chart.as_mut().ok_or(ChartError::NoDataset)?;
        let series_id = chart
            .dataset
            .series_by_id(id)
            .map(|series| series.id.clone())
            .ok_or_else(|| ChartError::UnknownSeries(id.to_owned()))?;
        if !chart.range.set_visible(&series_id, visible) {
            return Ok(());
        }

        debug!(series = %series_id, visible, "series visibility changed");
        self.emit_chart_event(ChartEvent::VisibilityChanged {
            id: series_id,
            visible,
        });
        self.request_redraw()
    }

    /// Flips one series and returns its new visibility.
    pub fn toggle_series(&mut self, id: &str) -> ChartResult<bool> {
        let chart = self.chart.as_mut().ok_or(ChartError::NoDataset)?;
        let series_id = chart
            .dataset
            .series_by_id(id)
            .map(|series| series.id.clone())
            .ok_or_else(|| ChartError::UnknownSeries(id.to_owned()))?;
        let visible = chart.range.toggle(&series_id);

        debug!(series = %series_id, visible, "series toggled");
        self.emit_chart_event(ChartEvent::VisibilityChanged {
            id: series_id,
            visible,
        });
        self.request_redraw()?;
        Ok(visible)
    }

    pub(super) fn sync_preview_frame(&mut self) -> ChartResult<()> {
        let width = self.layout.preview.width;
        let Some(chart) = self.chart.as_mut() else {
            return Ok(());
        };
        let mapping = chart.preview_mapping(width)?;
        chart
            .range
            .sync_preview_frame(chart.dataset.x_values(), mapping);
        Ok(())
    }

    /// Common tail of every window mutation: notify, drop a hover that left
    /// the window, schedule the redraw.
    pub(super) fn after_range_changed(&mut self) -> ChartResult<()> {
        let Some(window) = self.range_window() else {
            return Ok(());
        };
        debug!(begin = window.begin, end = window.end, "range window changed");
        self.emit_chart_event(ChartEvent::RangeChanged {
            begin: window.begin,
            end: window.end,
        });

        if self
            .hover
            .index()
            .is_some_and(|index| !window.contains(index))
        {
            self.hover.clear();
            self.emit_chart_event(ChartEvent::HoverCleared);
        }
        self.request_redraw()
    }
}
