//! Per-option selection state.

use std::collections::BTreeMap;

use super::{Catalog, OptionId};

/// Tracks which options are currently chosen.
///
/// Keyed by option id only, so state carries over a catalog reload for ids
/// that still exist. Unknown ids read as unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    chosen: BTreeMap<OptionId, bool>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection with every given id set to true.
    pub fn with_selected<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = OptionId>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.set(id, true);
        }
        selection
    }

    pub fn set(&mut self, id: OptionId, selected: bool) {
        self.chosen.insert(id, selected);
    }

    /// Flip the state of an id and return the new value.
    pub fn toggle(&mut self, id: OptionId) -> bool {
        let entry = self.chosen.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.chosen.get(id).copied().unwrap_or(false)
    }

    /// Reset every tracked id to unselected.
    pub fn clear_all(&mut self) {
        for selected in self.chosen.values_mut() {
            *selected = false;
        }
    }

    /// Ids currently set to true, in id order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &OptionId> {
        self.chosen.iter().filter(|&(_, &selected)| selected).map(|(id, _)| id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids().next().is_none()
    }

    /// Number of catalog options this selection would emit.
    pub fn count_in(&self, catalog: &Catalog) -> usize {
        catalog.options().filter(|o| self.is_selected(o.id.as_str())).count()
    }

    /// Drop state for ids that no longer exist in `catalog`.
    pub fn retain_known(&mut self, catalog: &Catalog) {
        self.chosen.retain(|id, _| catalog.contains_option(id.as_str()));
    }
}
