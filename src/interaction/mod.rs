//! Pointer gesture state machines.
//!
//! Both machines are plain values: they decide *what* a pointer event means
//! and leave range mutation and redraw scheduling to the engine.

mod hover;
mod preview_drag;

pub use hover::HoverState;
pub use preview_drag::{DragLimits, PreviewGesture, resolve_drag_window};

use serde::{Deserialize, Serialize};

use crate::core::DragTarget;

/// Which view a pointer event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Main,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Mouse button or touch went down.
    Down,
    Move,
    /// Mouse button or touch went up.
    Up,
    /// The platform aborted the gesture (touch cancel, focus loss).
    Cancel,
    /// The pointer left the surface.
    Leave,
}

/// Pointer or touch sample in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }

    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Preview gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    DraggingBegin,
    DraggingEnd,
    DraggingFrame,
}

impl InteractionMode {
    #[must_use]
    pub fn dragging(target: DragTarget) -> Self {
        match target {
            DragTarget::BeginHandle => Self::DraggingBegin,
            DragTarget::EndHandle => Self::DraggingEnd,
            DragTarget::Frame => Self::DraggingFrame,
        }
    }

    #[must_use]
    pub fn drag_target(self) -> Option<DragTarget> {
        match self {
            Self::Idle => None,
            Self::DraggingBegin => Some(DragTarget::BeginHandle),
            Self::DraggingEnd => Some(DragTarget::EndHandle),
            Self::DraggingFrame => Some(DragTarget::Frame),
        }
    }
}
