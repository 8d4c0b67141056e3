use serde::{Deserialize, Serialize};

use crate::core::{IndexTick, PlotArea, SeriesId, Transform, ValueTick, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive};

/// Which of the two views a scene belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartView {
    Main,
    Preview,
}

/// Series geometry of one view for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewScene {
    pub view: ChartView,
    pub area: PlotArea,
    pub transform: Transform,
    /// Visible series in dataset order, matching `series_paths`.
    pub visible: Vec<SeriesId>,
    pub series_paths: Vec<PolylinePrimitive>,
}

/// Backend-agnostic scene for one draw pass.
///
/// A frame without views is a cleared surface: backends paint the background
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub main: Option<ViewScene>,
    pub preview: Option<ViewScene>,
    /// Grid lines and the hover ruler.
    pub lines: Vec<LinePrimitive>,
    /// Preview mask and frame.
    pub rects: Vec<RectPrimitive>,
    /// Hover markers.
    pub circles: Vec<CirclePrimitive>,
    pub value_ticks: Vec<ValueTick>,
    pub index_ticks: Vec<IndexTick>,
    pub hover_index: Option<usize>,
}

impl RenderFrame {
    #[must_use]
    pub fn cleared(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            main: None,
            preview: None,
            lines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            value_ticks: Vec::new(),
            index_ticks: Vec::new(),
            hover_index: None,
        }
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.main.is_none() && self.preview.is_none()
    }

    #[must_use]
    pub fn series_path_count(&self) -> usize {
        self.main
            .iter()
            .chain(self.preview.iter())
            .map(|scene| scene.series_paths.len())
            .sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;

        for scene in self.main.iter().chain(self.preview.iter()) {
            for path in &scene.series_paths {
                path.validate()?;
            }
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }

        Ok(())
    }
}
