use crate::core::{
    AnimationState, Animator, ChartLayout, Dataset, HorizontalMapping, PreviewFrame, RangeWindow,
    SeriesId, Transform,
};
use crate::error::ChartResult;
use crate::extensions::ChartObserver;
use crate::interaction::{HoverState, InteractionMode, PreviewGesture};
use crate::render::{Renderer, Theme};

use super::{ChartEngineConfig, RangeController};

/// Dataset plus the selection state derived from it.
pub(super) struct LoadedChart {
    pub(super) dataset: Dataset,
    pub(super) range: RangeController,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the range controller, one animator per view, the
/// pointer state machines and the renderer. Hosts drive it with data, range
/// and pointer calls plus a display-refresh `tick`.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) layout: ChartLayout,
    pub(super) theme: Theme,
    pub(super) chart: Option<LoadedChart>,
    pub(super) main_animator: Animator,
    pub(super) preview_animator: Animator,
    pub(super) gesture: PreviewGesture,
    pub(super) hover: HoverState,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.chart.as_ref().map(|chart| &chart.dataset)
    }

    #[must_use]
    pub fn range_window(&self) -> Option<RangeWindow> {
        self.chart.as_ref().map(|chart| chart.range.window())
    }

    /// Visible series ids in dataset order.
    #[must_use]
    pub fn visible_series(&self) -> Vec<SeriesId> {
        self.chart
            .as_ref()
            .map(|chart| chart.range.visible().ordered_by(&chart.dataset))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_series_visible(&self, id: &str) -> bool {
        self.chart
            .as_ref()
            .is_some_and(|chart| chart.range.visible().contains(id))
    }

    #[must_use]
    pub fn preview_frame(&self) -> Option<PreviewFrame> {
        self.chart.as_ref().map(|chart| chart.range.preview_frame())
    }

    /// Main-view transform currently on screen (possibly mid-animation).
    #[must_use]
    pub fn main_transform(&self) -> Option<Transform> {
        self.main_animator.last_rendered()
    }

    /// Preview transform currently on screen (possibly mid-animation).
    #[must_use]
    pub fn preview_transform(&self) -> Option<Transform> {
        self.preview_animator.last_rendered()
    }

    #[must_use]
    pub fn main_animation(&self) -> Option<&AnimationState> {
        self.main_animator.state()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.main_animator.is_animating() || self.preview_animator.is_animating()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.gesture.mode()
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover.index()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Draws the current state without touching running animations.
    pub fn render(&mut self) -> ChartResult<()> {
        self.render_current()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl LoadedChart {
    /// X mapping of the preview strip, which always spans the whole dataset.
    pub(super) fn preview_mapping(&self, width: f64) -> ChartResult<HorizontalMapping> {
        HorizontalMapping::for_window(self.dataset.x_values(), 0, self.range.total(), width)
    }
}
