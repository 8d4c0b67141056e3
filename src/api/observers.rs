use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartObserver, ObserverContext};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Adds an observer. Ids must be non-empty and unique.
    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) -> ChartResult<()> {
        let id = observer.id();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observer_position(id).is_some() {
            return Err(ChartError::InvalidData(format!(
                "observer `{id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Returns `true` when an observer with `id` was removed.
    pub fn unregister_observer(&mut self, id: &str) -> bool {
        self.observer_position(id)
            .map(|position| self.observers.remove(position))
            .is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, id: &str) -> bool {
        self.observer_position(id).is_some()
    }

    fn observer_position(&self, id: &str) -> Option<usize> {
        self.observers.iter().position(|observer| observer.id() == id)
    }

    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            viewport: self.config.viewport,
            window: self.range_window(),
            visible_count: self
                .chart
                .as_ref()
                .map_or(0, |chart| chart.range.visible().len()),
            hover_index: self.hover.index(),
            interaction_mode: self.gesture.mode(),
            animating: self.is_animating(),
        }
    }

    /// Delivers `event` to every observer in registration order.
    pub(super) fn emit_chart_event(&mut self, event: ChartEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(&event, context);
        }
    }
}
