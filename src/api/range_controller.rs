use tracing::debug;

use crate::core::{Dataset, HorizontalMapping, PreviewFrame, RangeWindow, SeriesId, VisibleSet};

/// Owner of the range window, the visible set and the cached preview frame.
///
/// All three are mutated only through these methods; each returns whether
/// anything changed so the engine can decide on a redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeController {
    total: usize,
    min_window_len: usize,
    window: RangeWindow,
    visible: VisibleSet,
    frame: PreviewFrame,
}

impl RangeController {
    /// Last quarter of the data, every series visible.
    #[must_use]
    pub fn new(dataset: &Dataset, min_window_len: usize) -> Self {
        let total = dataset.total();
        Self {
            total,
            min_window_len,
            window: RangeWindow::initial(total, min_window_len),
            visible: VisibleSet::all(dataset),
            frame: PreviewFrame::default(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn min_window_len(&self) -> usize {
        self.min_window_len
    }

    #[must_use]
    pub fn window(&self) -> RangeWindow {
        self.window
    }

    #[must_use]
    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    #[must_use]
    pub fn preview_frame(&self) -> PreviewFrame {
        self.frame
    }

    /// Clamps and stores a requested window.
    pub fn set_range(&mut self, begin: usize, end: usize) -> bool {
        let window = RangeWindow::clamped(begin, end, self.total, self.min_window_len);
        if window != (RangeWindow { begin, end }) {
            debug!(
                requested_begin = begin,
                requested_end = end,
                begin = window.begin,
                end = window.end,
                "range request clamped"
            );
        }
        self.replace_window(window)
    }

    pub fn set_visible(&mut self, id: &SeriesId, visible: bool) -> bool {
        if visible {
            self.visible.insert(id.clone())
        } else {
            self.visible.remove(id.as_str())
        }
    }

    /// Flips `id` and returns its new visibility.
    pub fn toggle(&mut self, id: &SeriesId) -> bool {
        let visible = !self.visible.contains(id.as_str());
        self.set_visible(id, visible);
        visible
    }

    /// Re-projects the window onto the preview strip.
    pub fn sync_preview_frame(&mut self, x_values: &[f64], mapping: HorizontalMapping) {
        self.frame = PreviewFrame::project(self.window, x_values, mapping);
    }

    /// Stores the result of a preview drag step. The frame keeps its pixel
    /// position instead of snapping to sample positions.
    pub(super) fn apply_drag(&mut self, frame: PreviewFrame, window: RangeWindow) -> bool {
        self.frame = frame;
        self.replace_window(window)
    }

    fn replace_window(&mut self, window: RangeWindow) -> bool {
        if window == self.window {
            return false;
        }
        self.window = window;
        true
    }
}
