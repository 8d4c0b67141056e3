use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_ANIMATION_STEPS, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::ThemeMode;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can keep chart setup next
/// to their own settings; every field except `viewport` has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Ticks used to blend from the on-screen transform to a new one.
    #[serde(default = "default_animation_steps")]
    pub animation_steps: u32,
    /// Distance in pixels within which a press grabs a preview frame edge.
    #[serde(default = "default_handle_hit_px")]
    pub handle_hit_px: f64,
    /// Narrowest preview frame as a fraction of the strip width.
    #[serde(default = "default_min_frame_width_ratio")]
    pub min_frame_width_ratio: f64,
    /// Narrowest range window, in index steps.
    #[serde(default = "default_min_window_len")]
    pub min_window_len: usize,
    /// Grid line / axis label slots in the main view (0 disables them).
    #[serde(default = "default_main_label_count")]
    pub main_label_count: usize,
    #[serde(default = "default_main_line_width")]
    pub main_line_width: f64,
    #[serde(default = "default_preview_line_width")]
    pub preview_line_width: f64,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            animation_steps: default_animation_steps(),
            handle_hit_px: default_handle_hit_px(),
            min_frame_width_ratio: default_min_frame_width_ratio(),
            min_window_len: default_min_window_len(),
            main_label_count: default_main_label_count(),
            main_line_width: default_main_line_width(),
            preview_line_width: default_preview_line_width(),
            theme_mode: ThemeMode::default(),
        }
    }

    #[must_use]
    pub fn with_animation_steps(mut self, steps: u32) -> Self {
        self.animation_steps = steps;
        self
    }

    #[must_use]
    pub fn with_handle_hit_px(mut self, pixels: f64) -> Self {
        self.handle_hit_px = pixels;
        self
    }

    #[must_use]
    pub fn with_min_frame_width_ratio(mut self, ratio: f64) -> Self {
        self.min_frame_width_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_min_window_len(mut self, len: usize) -> Self {
        self.min_window_len = len;
        self
    }

    #[must_use]
    pub fn with_main_label_count(mut self, count: usize) -> Self {
        self.main_label_count = count;
        self
    }

    #[must_use]
    pub fn with_theme_mode(mut self, mode: ThemeMode) -> Self {
        self.theme_mode = mode;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }

    pub(super) fn validate(self) -> ChartResult<Self> {
        if self.animation_steps == 0 {
            return Err(ChartError::InvalidData(
                "animation_steps must be >= 1".to_owned(),
            ));
        }
        if !self.handle_hit_px.is_finite() || self.handle_hit_px < 0.0 {
            return Err(ChartError::InvalidData(
                "handle_hit_px must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_frame_width_ratio.is_finite()
            || self.min_frame_width_ratio <= 0.0
            || self.min_frame_width_ratio >= 1.0
        {
            return Err(ChartError::InvalidData(
                "min_frame_width_ratio must be finite and in (0, 1)".to_owned(),
            ));
        }
        if self.min_window_len == 0 {
            return Err(ChartError::InvalidData(
                "min_window_len must be >= 1".to_owned(),
            ));
        }
        for (name, width) in [
            ("main_line_width", self.main_line_width),
            ("preview_line_width", self.preview_line_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

fn default_animation_steps() -> u32 {
    DEFAULT_ANIMATION_STEPS
}

fn default_handle_hit_px() -> f64 {
    10.0
}

fn default_min_frame_width_ratio() -> f64 {
    1.0 / 32.0
}

fn default_min_window_len() -> usize {
    2
}

fn default_main_label_count() -> usize {
    5
}

fn default_main_line_width() -> f64 {
    3.0
}

fn default_preview_line_width() -> f64 {
    1.0
}
