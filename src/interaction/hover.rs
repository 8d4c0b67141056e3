use serde::{Deserialize, Serialize};

/// Last sample index resolved under the pointer in the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    /// Returns `true` when `index` differs from the previous one.
    pub fn update(&mut self, index: usize) -> bool {
        if self.index == Some(index) {
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Returns `true` when something was hovered.
    pub fn clear(&mut self) -> bool {
        self.index.take().is_some()
    }
}
