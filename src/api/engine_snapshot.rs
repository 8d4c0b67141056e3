use serde::{Deserialize, Serialize};

use crate::core::{PreviewFrame, RangeWindow, SeriesId, Transform, Viewport};
use crate::interaction::InteractionMode;
use crate::render::ThemeMode;

/// Progress of a running view transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationProgress {
    pub step_index: u32,
    pub total_steps: u32,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub samples: usize,
    pub window: Option<RangeWindow>,
    pub visible: Vec<SeriesId>,
    pub preview_frame: Option<PreviewFrame>,
    pub theme_mode: ThemeMode,
    pub main_transform: Option<Transform>,
    pub preview_transform: Option<Transform>,
    pub animation: Option<AnimationProgress>,
    pub hover_index: Option<usize>,
    pub interaction_mode: InteractionMode,
}
