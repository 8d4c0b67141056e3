use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{Dataset, SeriesId};

/// Series currently displayed. Membership is what matters; drawing order
/// always follows the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleSet {
    ids: IndexSet<SeriesId>,
}

impl VisibleSet {
    /// Every series of `dataset`.
    #[must_use]
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            ids: dataset.ids().cloned().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns `true` when the id was not present before.
    pub fn insert(&mut self, id: SeriesId) -> bool {
        self.ids.insert(id)
    }

    /// Returns `true` when the id was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.shift_remove(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesId> {
        self.ids.iter()
    }

    /// Visible ids in dataset order.
    #[must_use]
    pub fn ordered_by(&self, dataset: &Dataset) -> Vec<SeriesId> {
        dataset
            .ids()
            .filter(|id| self.contains(id.as_str()))
            .cloned()
            .collect()
    }
}
