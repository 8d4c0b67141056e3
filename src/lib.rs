//! chart-scrubber: headless line-chart engine with a range preview.
//!
//! The engine maps data samples to pixels for a main plot and a miniature
//! preview strip, keeps both views in sync while the host drags the preview
//! frame, blends between ranges over a fixed number of ticks, and resolves
//! pointer positions back to sample indices for hover tooltips. Drawing is
//! delegated to a [`render::Renderer`] that receives backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
