use crate::event::SelectionEvent;

/// Ordered multi-selection over catalog values.
///
/// Insertion order is the display order of the chips. Duplicates cannot
/// occur: toggling a value that is already present removes it instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    values: Vec<&'static str>,
}

impl SelectionState {
    pub fn values(&self) -> &[&'static str] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| *v == value)
    }

    /// Append the value, or remove it if it is already selected.
    pub fn toggle(&mut self, value: &'static str) -> SelectionEvent {
        if self.remove_stable(value) {
            SelectionEvent::Removed(value)
        } else {
            self.values.push(value);
            SelectionEvent::Added(value)
        }
    }

    /// Drop the most recently added value. No-op on an empty selection.
    ///
    /// Callers only invoke this while the query text is empty, so backspace
    /// never eats a chip while the user is still editing the filter.
    pub fn remove_last(&mut self) -> Option<SelectionEvent> {
        self.values.pop().map(SelectionEvent::Removed)
    }

    /// Remove a specific value wherever it sits, keeping the relative order
    /// of the remaining chips.
    pub fn remove_by_value(&mut self, value: &str) -> Option<SelectionEvent> {
        let position = self.values.iter().position(|v| *v == value)?;
        let removed = self.values.remove(position);
        Some(SelectionEvent::Removed(removed))
    }

    fn remove_stable(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| *v == value) {
            Some(position) => {
                self.values.remove(position);
                true
            }
            None => false,
        }
    }
}
