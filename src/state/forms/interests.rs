//! Bounded multi-select over the fixed field-of-interest vocabulary

/// Maximum number of fields an applicant can pick
pub const MAX_INTERESTS: usize = 3;

/// Fields of interest offered by the program
pub const INTEREST_VOCABULARY: [&str; 17] = [
    "Biology",
    "Chemistry",
    "Physics",
    "Mathematics",
    "Computer Science",
    "Engineering",
    "Medicine",
    "Environmental Science",
    "Astronomy",
    "Economics",
    "Psychology",
    "Sociology",
    "Political Science",
    "History",
    "Linguistics",
    "Philosophy",
    "Arts & Design",
];

/// Result of toggling one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Already `MAX_INTERESTS` selected; selection unchanged
    AtCapacity,
    /// Not part of the vocabulary
    Unknown,
}

/// Selection state in insertion order, plus a browsing cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestSelector {
    selected: Vec<&'static str>,
    /// Index into `INTEREST_VOCABULARY` under the cursor
    pub cursor: usize,
}

impl InterestSelector {
    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| *s == name)
    }

    pub fn toggle(&mut self, name: &str) -> ToggleOutcome {
        let Some(entry) = INTEREST_VOCABULARY.iter().copied().find(|v| *v == name) else {
            return ToggleOutcome::Unknown;
        };

        if let Some(pos) = self.selected.iter().position(|s| *s == entry) {
            self.selected.remove(pos);
            return ToggleOutcome::Deselected;
        }

        if self.selected.len() >= MAX_INTERESTS {
            return ToggleOutcome::AtCapacity;
        }

        self.selected.push(entry);
        ToggleOutcome::Selected
    }

    /// Toggle the vocabulary entry under the cursor
    pub fn toggle_at_cursor(&mut self) -> ToggleOutcome {
        match INTEREST_VOCABULARY.get(self.cursor) {
            Some(name) => self.toggle(name),
            None => ToggleOutcome::Unknown,
        }
    }

    /// Move the cursor by `delta` entries, clamped to the vocabulary
    pub fn move_cursor(&mut self, delta: isize) {
        let last = INTEREST_VOCABULARY.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vocabulary_has_seventeen_unique_entries() {
        let mut names = INTEREST_VOCABULARY.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn test_toggle_selects_then_deselects() {
        let mut selector = InterestSelector::default();
        assert_eq!(selector.toggle("Physics"), ToggleOutcome::Selected);
        assert!(selector.is_selected("Physics"));
        assert_eq!(selector.toggle("Physics"), ToggleOutcome::Deselected);
        assert_eq!(selector.len(), 0);
    }

    #[test]
    fn test_fourth_selection_rejected() {
        let mut selector = InterestSelector::default();
        for name in ["Biology", "Chemistry", "Physics"] {
            assert_eq!(selector.toggle(name), ToggleOutcome::Selected);
        }
        assert_eq!(selector.toggle("Mathematics"), ToggleOutcome::AtCapacity);
        assert_eq!(selector.selected(), &["Biology", "Chemistry", "Physics"]);
    }

    #[test]
    fn test_deselect_allowed_at_capacity() {
        let mut selector = InterestSelector::default();
        for name in ["Biology", "Chemistry", "Physics"] {
            selector.toggle(name);
        }
        assert_eq!(selector.toggle("Chemistry"), ToggleOutcome::Deselected);
        assert_eq!(selector.toggle("History"), ToggleOutcome::Selected);
        assert_eq!(selector.selected(), &["Biology", "Physics", "History"]);
    }

    #[test]
    fn test_unknown_name_rejected() {
        let mut selector = InterestSelector::default();
        assert_eq!(selector.toggle("Alchemy"), ToggleOutcome::Unknown);
        assert_eq!(selector.len(), 0);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut selector = InterestSelector::default();
        selector.move_cursor(-1);
        assert_eq!(selector.cursor, 0);
        selector.move_cursor(100);
        assert_eq!(selector.cursor, INTEREST_VOCABULARY.len() - 1);
        assert_eq!(INTEREST_VOCABULARY[selector.cursor], "Arts & Design");
    }

    #[test]
    fn test_toggle_at_cursor() {
        let mut selector = InterestSelector::default();
        selector.move_cursor(2);
        assert_eq!(selector.toggle_at_cursor(), ToggleOutcome::Selected);
        assert_eq!(selector.selected(), &["Physics"]);
    }
}
