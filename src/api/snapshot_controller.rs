use crate::error::ChartResult;
use crate::render::Renderer;

use super::{AnimationProgress, ChartEngine, EngineSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.config.viewport,
            samples: self.dataset().map_or(0, |dataset| dataset.len()),
            window: self.range_window(),
            visible: self.visible_series(),
            preview_frame: self.preview_frame(),
            theme_mode: self.config.theme_mode,
            main_transform: self.main_transform(),
            preview_transform: self.preview_transform(),
            animation: self.main_animation().map(|state| AnimationProgress {
                step_index: state.step_index,
                total_steps: state.total_steps,
            }),
            hover_index: self.hover_index(),
            interaction_mode: self.interaction_mode(),
        }
    }

    /// Serializes the snapshot inside the versioned JSON contract.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
