use serde::{Deserialize, Serialize};

use crate::core::{DragTarget, RangeWindow, SeriesId, Viewport};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub viewport: Viewport,
    pub window: Option<RangeWindow>,
    pub visible_count: usize,
    pub hover_index: Option<usize>,
    pub interaction_mode: InteractionMode,
    pub animating: bool,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    DatasetLoaded { samples: usize, series: usize },
    RangeChanged { begin: usize, end: usize },
    VisibilityChanged { id: SeriesId, visible: bool },
    /// The tooltip collaborator should show `index`.
    HoverIndexChanged { index: usize },
    HoverCleared,
    GestureStarted { target: DragTarget },
    GestureEnded,
    /// Nothing is visible; the surface was cleared.
    Cleared,
    Rendered { animating: bool },
    ThemeChanged,
}

/// Hook interface for host-side reactions (tooltips, legends, logging).
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ObserverContext);
}
