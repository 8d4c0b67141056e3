use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Horizontal band of the surface one view draws into.
///
/// Views always span the full surface width starting at `x = 0`; `top` is the
/// pixel row of the upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(top: f64, width: f64, height: f64) -> Self {
        Self { top, width, height }
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Inclusive hit-test in surface pixels.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (self.top..=self.bottom()).contains(&y)
    }
}

/// Placement of the main plot and the preview strip on one surface.
///
/// The preview strip takes the bottom tenth of the surface. The main plot
/// starts at the top and leaves one strip-height band above the preview for
/// x-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub main: PlotArea,
    pub preview: PlotArea,
}

impl ChartLayout {
    pub const MIN_SURFACE_HEIGHT: u32 = 10;

    pub fn from_viewport(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() || viewport.height < Self::MIN_SURFACE_HEIGHT {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let preview_height = f64::from(viewport.height / 10);

        Ok(Self {
            main: PlotArea::new(0.0, width, height - 2.0 * preview_height),
            preview: PlotArea::new(height - preview_height, width, preview_height),
        })
    }
}
