use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Transform;

pub const DEFAULT_ANIMATION_STEPS: u32 = 10;

/// One in-flight transition between two transforms of the same view.
///
/// `step_index` counts the steps already rendered; the transition is done once
/// it reaches `total_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub from: Transform,
    pub to: Transform,
    pub step_index: u32,
    pub total_steps: u32,
}

impl AnimationState {
    #[must_use]
    pub fn new(from: Transform, to: Transform, total_steps: u32) -> Self {
        Self {
            from,
            to,
            step_index: 0,
            total_steps: total_steps.max(1),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step_index >= self.total_steps
    }

    #[must_use]
    pub fn current(&self) -> Transform {
        interpolate_transform(&self.from, &self.to, self.step_index, self.total_steps)
    }

    /// Moves one step forward and returns the transform to draw.
    pub fn advance(&mut self) -> Option<Transform> {
        if self.is_finished() {
            return None;
        }
        self.step_index += 1;
        Some(self.current())
    }
}

/// Linear blend of every field at `step / total_steps`.
///
/// Index fields are rounded to whole samples at every step; the final step
/// returns `to` exactly.
#[must_use]
pub fn interpolate_transform(
    from: &Transform,
    to: &Transform,
    step: u32,
    total_steps: u32,
) -> Transform {
    if step >= total_steps {
        return *to;
    }
    let t = f64::from(step) / f64::from(total_steps);
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    let lerp_index = |a: usize, b: usize| lerp(a as f64, b as f64).round() as usize;

    Transform {
        min_x: lerp(from.min_x, to.min_x),
        max_x: lerp(from.max_x, to.max_x),
        min_y: lerp(from.min_y, to.min_y),
        max_y: lerp(from.max_y, to.max_y),
        x_ratio: lerp(from.x_ratio, to.x_ratio),
        y_ratio: lerp(from.y_ratio, to.y_ratio),
        x_offset: lerp(from.x_offset, to.x_offset),
        y_offset: lerp(from.y_offset, to.y_offset),
        x_step: lerp_index(from.x_step, to.x_step).max(1),
        begin: lerp_index(from.begin, to.begin),
        end: lerp_index(from.end, to.end),
    }
}

/// How a redraw request was taken up by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStart {
    /// Nothing was rendered before; the target is drawn as-is.
    Immediate,
    /// The target equals what is on screen.
    Unchanged,
    /// A transition was (re)started and advances on ticks.
    Scheduled,
}

/// Per-view transition driver advanced by an external tick source.
///
/// Holds at most one [`AnimationState`]; a new request replaces it and starts
/// from whatever was rendered last, including a partial step.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    total_steps: u32,
    last_rendered: Option<Transform>,
    state: Option<AnimationState>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_STEPS)
    }
}

impl Animator {
    #[must_use]
    pub fn new(total_steps: u32) -> Self {
        Self {
            total_steps: total_steps.max(1),
            last_rendered: None,
            state: None,
        }
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[must_use]
    pub fn last_rendered(&self) -> Option<Transform> {
        self.last_rendered
    }

    #[must_use]
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_some()
    }

    pub fn request(&mut self, target: Transform) -> AnimationStart {
        let Some(from) = self.last_rendered else {
            self.last_rendered = Some(target);
            self.state = None;
            return AnimationStart::Immediate;
        };

        if let Some(previous) = self.state.take() {
            trace!(
                step = previous.step_index,
                total = previous.total_steps,
                "animation superseded"
            );
        }
        if from == target {
            return AnimationStart::Unchanged;
        }

        self.state = Some(AnimationState::new(from, target, self.total_steps));
        AnimationStart::Scheduled
    }

    /// Advances the running transition by one step.
    ///
    /// Returns the transform to draw, or `None` when idle.
    pub fn tick(&mut self) -> Option<Transform> {
        let state = self.state.as_mut()?;
        let current = state.advance()?;
        if state.is_finished() {
            self.state = None;
        }
        self.last_rendered = Some(current);
        Some(current)
    }

    /// Drops the in-flight transition, keeping the last rendered transform.
    pub fn cancel(&mut self) {
        self.state = None;
    }

    /// Forgets everything so the next request renders immediately.
    pub fn reset(&mut self) {
        self.state = None;
        self.last_rendered = None;
    }
}
