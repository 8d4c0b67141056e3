//! Host-facing engine facade.
//!
//! `ChartEngine` is split into one `impl` block per concern; the files below
//! share its `pub(super)` state.

mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod observers;
mod range_controller;
mod render_coordinator;
mod scene_builder;
mod selection_controller;
mod snapshot_controller;
mod theme_controller;
mod tooltip;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::{AnimationProgress, EngineSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use range_controller::RangeController;
pub use tooltip::{TOOLTIP_GAP_PX, Tooltip, TooltipEntry, TooltipPlacement};
