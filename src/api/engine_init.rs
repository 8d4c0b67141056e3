use tracing::{debug, info};

use crate::core::{Animator, ChartLayout, Dataset, Viewport};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::interaction::{HoverState, PreviewGesture};
use crate::render::{Renderer, Theme};

use super::{ChartEngine, ChartEngineConfig, RangeController, engine::LoadedChart};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no dataset; nothing is drawn until `load`.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let layout = ChartLayout::from_viewport(config.viewport)?;

        Ok(Self {
            renderer,
            config,
            layout,
            theme: Theme::for_mode(config.theme_mode),
            chart: None,
            main_animator: Animator::new(config.animation_steps),
            preview_animator: Animator::new(config.animation_steps),
            gesture: PreviewGesture::default(),
            hover: HoverState::default(),
            observers: Vec::new(),
        })
    }

    /// `new` followed by `load`.
    pub fn with_dataset(renderer: R, config: ChartEngineConfig, dataset: Dataset) -> ChartResult<Self> {
        let mut engine = Self::new(renderer, config)?;
        engine.load(dataset)?;
        Ok(engine)
    }

    /// Replaces the dataset.
    ///
    /// The window starts on the last quarter of the data with every series
    /// visible, and the first frame is drawn immediately without animation.
    /// Selection state is built completely before it replaces the previous
    /// chart, so a failure leaves the engine as it was.
    pub fn load(&mut self, dataset: Dataset) -> ChartResult<()> {
        let range = RangeController::new(&dataset, self.config.min_window_len);
        let mut chart = LoadedChart { dataset, range };
        let mapping = chart.preview_mapping(self.layout.preview.width)?;
        chart
            .range
            .sync_preview_frame(chart.dataset.x_values(), mapping);

        let samples = chart.dataset.len();
        let series = chart.dataset.series().len();
        let window = chart.range.window();
        self.chart = Some(chart);
        self.main_animator.reset();
        self.preview_animator.reset();
        self.gesture.release();
        self.hover.clear();

        info!(
            samples,
            series,
            begin = window.begin,
            end = window.end,
            "dataset loaded"
        );
        self.emit_chart_event(ChartEvent::DatasetLoaded { samples, series });
        self.request_redraw()
    }

    /// Resizes the drawing surface and redraws without animation.
    ///
    /// An active preview gesture is dropped because its pixel anchors no
    /// longer apply.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let layout = ChartLayout::from_viewport(viewport)?;
        self.config.viewport = viewport;
        self.layout = layout;
        debug!(width = viewport.width, height = viewport.height, "viewport resized");

        if self.gesture.is_active() {
            self.gesture.release();
            self.emit_chart_event(ChartEvent::GestureEnded);
        }
        self.sync_preview_frame()?;
        self.main_animator.reset();
        self.preview_animator.reset();
        self.request_redraw()
    }
}
