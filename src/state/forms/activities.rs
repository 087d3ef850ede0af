//! Bounded editor for the extracurricular activities list

/// Maximum number of activities an applicant can list
pub const MAX_ACTIVITIES: usize = 5;

/// Result of trying to append an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Input was empty or whitespace only
    Empty,
    /// The list already holds `MAX_ACTIVITIES` entries
    AtCapacity,
}

/// Append/remove list of free-text activities with its own input buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityList {
    entries: Vec<String>,
    /// Text typed but not yet added
    pub input: String,
    /// Highlighted entry for removal
    pub selected: usize,
}

impl ActivityList {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ACTIVITIES
    }

    /// Append trimmed text. Empty text and a full list leave the list unchanged.
    pub fn add(&mut self, text: &str) -> AddOutcome {
        let text = text.trim();
        if text.is_empty() {
            return AddOutcome::Empty;
        }
        if self.is_full() {
            return AddOutcome::AtCapacity;
        }
        self.entries.push(text.to_string());
        AddOutcome::Added
    }

    /// Add the input buffer as a new entry, clearing the buffer on success
    pub fn commit_input(&mut self) -> AddOutcome {
        let outcome = self.add(&self.input.clone());
        if outcome == AddOutcome::Added {
            self.input.clear();
        }
        outcome
    }

    /// Remove the entry at `index`, shifting later entries down.
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
        Some(removed)
    }

    pub fn remove_selected(&mut self) -> Option<String> {
        self.remove(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_trims_text() {
        let mut list = ActivityList::default();
        assert_eq!(list.add("  Robotics club  "), AddOutcome::Added);
        assert_eq!(list.entries(), &["Robotics club".to_string()]);
    }

    #[test]
    fn test_add_rejects_whitespace() {
        let mut list = ActivityList::default();
        assert_eq!(list.add("   "), AddOutcome::Empty);
        assert!(list.is_empty());
    }

    #[test]
    fn test_sixth_add_is_rejected() {
        let mut list = ActivityList::default();
        for i in 0..5 {
            assert_eq!(list.add(&format!("Activity {i}")), AddOutcome::Added);
        }
        let before = list.clone();
        assert_eq!(list.add("Activity 5"), AddOutcome::AtCapacity);
        assert_eq!(list.len(), MAX_ACTIVITIES);
        assert_eq!(list, before);
    }

    #[test]
    fn test_commit_input_clears_buffer_on_success() {
        let mut list = ActivityList::default();
        list.input = "Debate team".to_string();
        assert_eq!(list.commit_input(), AddOutcome::Added);
        assert!(list.input.is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_commit_input_keeps_buffer_when_full() {
        let mut list = ActivityList::default();
        for i in 0..5 {
            list.add(&format!("A{i}"));
        }
        list.input = "One more".to_string();
        assert_eq!(list.commit_input(), AddOutcome::AtCapacity);
        assert_eq!(list.input, "One more");
    }

    #[test]
    fn test_remove_shifts_entries() {
        let mut list = ActivityList::default();
        list.add("a");
        list.add("b");
        list.add("c");
        assert_eq!(list.remove(1), Some("b".to_string()));
        assert_eq!(list.entries(), &["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = ActivityList::default();
        list.add("a");
        assert_eq!(list.remove(3), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_selected_clamps_selection() {
        let mut list = ActivityList::default();
        list.add("a");
        list.add("b");
        list.select_next();
        assert_eq!(list.selected, 1);
        assert_eq!(list.remove_selected(), Some("b".to_string()));
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_select_bounds() {
        let mut list = ActivityList::default();
        list.select_prev();
        list.select_next();
        assert_eq!(list.selected, 0);
    }
}
