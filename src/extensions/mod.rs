//! Host-facing extension points.
//!
//! Observers see engine state through read-only snapshots and never mutate
//! core internals directly.

pub mod observers;

pub use observers::{ChartEvent, ChartObserver, ObserverContext};
