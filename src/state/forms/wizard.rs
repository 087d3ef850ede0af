//! Application wizard: section navigation, validation gating and the
//! submission lifecycle.
//!
//! The wizard is the single owner of every value the applicant enters.
//! Renderers read through it and key handlers write through it; the
//! activity list and interest selector are only reachable via its methods.

use super::activities::{ActivityList, AddOutcome};
use super::draft::{ApplicationDraft, SubmissionReceipt};
use super::field::{FieldId, FieldKind, FormField};
use super::interests::{InterestSelector, ToggleOutcome};
use super::schema::{self, Candidate};
use super::section::Section;
use std::collections::{BTreeMap, BTreeSet};

/// Focus slot in the active section: one of its fields or the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Actions,
}

/// Buttons in the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Previous,
    Next,
    Submit,
}

impl WizardAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
            Self::Submit => "Submit Application",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(SubmissionReceipt),
    Failed(String),
}

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Section, to: Section },
    /// `section` failed validation and is now active with its errors recorded
    Blocked { section: Section, errors: usize },
    Unchanged,
}

/// Why a submit request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    NotOnFinalSection,
    AlreadyPending,
    Invalid { section: Section, errors: usize },
}

#[derive(Debug, Clone)]
pub struct ApplicationWizard {
    active: Section,
    fields: BTreeMap<FieldId, FormField>,
    interests: InterestSelector,
    activities: ActivityList,
    errors: BTreeMap<FieldId, &'static str>,
    /// Fields validated at least once; these re-validate on every change
    touched: BTreeSet<FieldId>,
    submission: SubmissionStatus,
    focus_index: usize,
    selected_action: usize,
    tab_scroll_offset: u16,
}

impl Default for ApplicationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationWizard {
    pub fn new() -> Self {
        let fields = FieldId::ALL
            .into_iter()
            .filter_map(|id| FormField::empty(id).map(|f| (id, f)))
            .collect();

        let mut wizard = Self {
            active: Section::Personal,
            fields,
            interests: InterestSelector::default(),
            activities: ActivityList::default(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            submission: SubmissionStatus::Idle,
            focus_index: 0,
            selected_action: 0,
            tab_scroll_offset: 0,
        };
        wizard.selected_action = wizard.default_action_index();
        wizard
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields.get(&id)
    }

    pub fn text(&self, id: FieldId) -> &str {
        self.fields.get(&id).map(FormField::as_text).unwrap_or("")
    }

    pub fn flag(&self, id: FieldId) -> bool {
        self.fields.get(&id).is_some_and(FormField::as_flag)
    }

    pub fn interests(&self) -> &InterestSelector {
        &self.interests
    }

    pub fn activities(&self) -> &ActivityList {
        &self.activities
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.errors.get(&id).copied()
    }

    pub fn section_error_count(&self, section: Section) -> usize {
        section
            .fields()
            .iter()
            .filter(|id| self.errors.contains_key(id))
            .count()
    }

    pub fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionStatus::Pending
    }

    /// Column offset that left-aligns the active tab in the tab strip
    pub fn tab_scroll_offset(&self) -> u16 {
        self.tab_scroll_offset
    }

    /// The supporting-documents alert shows on the Additional section while
    /// financial aid is requested
    pub fn shows_financial_aid_notice(&self) -> bool {
        self.active == Section::Additional && self.flag(FieldId::FinancialAid)
    }

    // Focus

    pub fn focus(&self) -> Focus {
        self.active
            .fields()
            .get(self.focus_index)
            .map(|id| Focus::Field(*id))
            .unwrap_or(Focus::Actions)
    }

    fn focus_slot_count(&self) -> usize {
        self.active.fields().len() + 1
    }

    /// Move focus forward, validating the field being left
    pub fn next_focus(&mut self) {
        self.blur();
        self.focus_index = (self.focus_index + 1) % self.focus_slot_count();
    }

    /// Move focus backward, validating the field being left
    pub fn prev_focus(&mut self) {
        self.blur();
        if self.focus_index == 0 {
            self.focus_index = self.focus_slot_count() - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    /// Focus a field of the active section; fields of other sections are ignored
    pub fn focus_field(&mut self, id: FieldId) {
        if let Some(index) = self.active.fields().iter().position(|f| *f == id) {
            self.blur();
            self.focus_index = index;
        }
    }

    fn blur(&mut self) {
        if let Focus::Field(id) = self.focus() {
            self.validate_field(id);
        }
    }

    // Action row

    pub fn actions(&self) -> &'static [WizardAction] {
        match self.active {
            Section::Personal => &[WizardAction::Next],
            Section::Additional => &[WizardAction::Previous, WizardAction::Submit],
            _ => &[WizardAction::Previous, WizardAction::Next],
        }
    }

    fn default_action_index(&self) -> usize {
        self.actions().len() - 1
    }

    pub fn selected_action(&self) -> WizardAction {
        let actions = self.actions();
        actions[self.selected_action.min(actions.len() - 1)]
    }

    pub fn select_next_action(&mut self) {
        self.selected_action = (self.selected_action + 1) % self.actions().len();
    }

    pub fn select_prev_action(&mut self) {
        let count = self.actions().len();
        self.selected_action = (self.selected_action + count - 1) % count;
    }

    // Editing

    pub fn set_text(&mut self, id: FieldId, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(&id) {
            field.set_text(value);
        }
        self.revalidate_if_touched(id);
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        match self.focus() {
            Focus::Field(FieldId::Extracurriculars) => self.activities.input.push(c),
            Focus::Field(id) => {
                if let Some(field) = self.fields.get_mut(&id) {
                    field.push_char(c);
                }
                self.revalidate_if_touched(id);
            }
            Focus::Actions => {}
        }
    }

    /// Insert a line break into the focused multiline input
    pub fn input_newline(&mut self) {
        if let Focus::Field(id) = self.focus() {
            if id.is_multiline() {
                self.input_char('\n');
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus() {
            Focus::Field(FieldId::Extracurriculars) => {
                self.activities.input.pop();
            }
            Focus::Field(id) => {
                if let Some(field) = self.fields.get_mut(&id) {
                    field.pop_char();
                }
                self.revalidate_if_touched(id);
            }
            Focus::Actions => {}
        }
    }

    /// Flip a checkbox field, returning its new value
    pub fn toggle_flag(&mut self, id: FieldId) -> bool {
        match self.fields.get_mut(&id) {
            Some(field) if id.kind() == FieldKind::Flag => {
                field.toggle();
                field.as_flag()
            }
            _ => false,
        }
    }

    pub fn toggle_interest(&mut self, name: &str) -> ToggleOutcome {
        let outcome = self.interests.toggle(name);
        self.interests_toggled(outcome)
    }

    pub fn toggle_interest_at_cursor(&mut self) -> ToggleOutcome {
        let outcome = self.interests.toggle_at_cursor();
        self.interests_toggled(outcome)
    }

    fn interests_toggled(&mut self, outcome: ToggleOutcome) -> ToggleOutcome {
        if matches!(outcome, ToggleOutcome::Selected | ToggleOutcome::Deselected) {
            self.revalidate_if_touched(FieldId::FieldsOfInterest);
        }
        outcome
    }

    pub fn move_interest_cursor(&mut self, delta: isize) {
        self.interests.move_cursor(delta);
    }

    pub fn add_activity(&mut self, text: &str) -> AddOutcome {
        self.activities.add(text)
    }

    /// Add whatever is in the activity input buffer
    pub fn commit_activity_input(&mut self) -> AddOutcome {
        self.activities.commit_input()
    }

    pub fn remove_selected_activity(&mut self) -> Option<String> {
        self.activities.remove_selected()
    }

    pub fn select_next_activity(&mut self) {
        self.activities.select_next();
    }

    pub fn select_prev_activity(&mut self) {
        self.activities.select_prev();
    }

    // Validation

    fn candidate(&self, id: FieldId) -> Candidate<'_> {
        match id.kind() {
            FieldKind::Selection => Candidate::Count(self.interests.len()),
            FieldKind::List => Candidate::Count(self.activities.len()),
            FieldKind::Flag => Candidate::Flag(self.flag(id)),
            FieldKind::Text | FieldKind::Multiline => Candidate::Text(self.text(id)),
        }
    }

    /// Validate one field, recording or clearing its error
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        self.touched.insert(id);
        match schema::validate(id, self.candidate(id)) {
            Ok(()) => {
                self.errors.remove(&id);
                true
            }
            Err(message) => {
                self.errors.insert(id, message);
                false
            }
        }
    }

    /// Validate every field of a section, returning the number of failures
    pub fn validate_section(&mut self, section: Section) -> usize {
        section
            .fields()
            .iter()
            .filter(|id| !self.validate_field(**id))
            .count()
    }

    /// Re-check a field on change once it has been validated before
    fn revalidate_if_touched(&mut self, id: FieldId) {
        if self.touched.contains(&id) {
            self.validate_field(id);
        }
    }

    // Navigation

    /// Advance one section if the active section validates
    pub fn next(&mut self) -> Transition {
        match self.active.next() {
            Some(target) => self.select(target),
            None => Transition::Unchanged,
        }
    }

    /// Step back one section; never validates and never clears values
    pub fn previous(&mut self) -> Transition {
        match self.active.prev() {
            Some(target) => {
                let from = self.active;
                self.set_active(target);
                Transition::Moved { from, to: target }
            }
            None => Transition::Unchanged,
        }
    }

    /// Jump straight to a section.
    ///
    /// Backward jumps are free. Forward jumps validate each section from the
    /// active one up to the target; the first section that fails becomes
    /// active with its errors shown.
    pub fn select(&mut self, target: Section) -> Transition {
        let from = self.active;
        if target == from {
            return Transition::Unchanged;
        }

        if target > from {
            for section in &Section::ALL[from.index()..target.index()] {
                let errors = self.validate_section(*section);
                if errors > 0 {
                    if *section != from {
                        self.set_active(*section);
                    }
                    tracing::debug!("Transition to {target:?} blocked by {section:?} ({errors} errors)");
                    return Transition::Blocked {
                        section: *section,
                        errors,
                    };
                }
            }
        }

        self.set_active(target);
        Transition::Moved { from, to: target }
    }

    fn set_active(&mut self, section: Section) {
        tracing::debug!("Section {:?} -> {:?}", self.active, section);
        self.active = section;
        self.focus_index = 0;
        self.selected_action = self.default_action_index();
        self.tab_scroll_offset = section.tab_scroll_offset();
    }

    // Submission

    /// Assemble the payload from the current values
    pub fn draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            full_name: self.text(FieldId::FullName).trim().to_string(),
            email: self.text(FieldId::Email).trim().to_string(),
            phone: self.text(FieldId::Phone).trim().to_string(),
            city: self.text(FieldId::City).trim().to_string(),
            country: self.text(FieldId::Country).trim().to_string(),
            school: self.text(FieldId::School).trim().to_string(),
            grade: self.text(FieldId::Grade).trim().to_string(),
            gpa: self.text(FieldId::Gpa).trim().to_string(),
            parent_name: self.text(FieldId::ParentName).trim().to_string(),
            parent_email: self.text(FieldId::ParentEmail).trim().to_string(),
            parent_phone: self.text(FieldId::ParentPhone).trim().to_string(),
            fields_of_interest: self
                .interests
                .selected()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            research_interest: self.text(FieldId::ResearchInterest).trim().to_string(),
            motivation: self.text(FieldId::Motivation).trim().to_string(),
            extracurriculars: self.activities.entries().to_vec(),
            achievements: self.text(FieldId::Achievements).trim().to_string(),
            financial_aid: self.flag(FieldId::FinancialAid),
            referral_source: self.text(FieldId::ReferralSource).trim().to_string(),
            additional_info: self.text(FieldId::AdditionalInfo).trim().to_string(),
        }
    }

    /// Validate everything and mark the submission pending.
    ///
    /// Only available from the last section, and only once at a time.
    pub fn begin_submit(&mut self) -> Result<ApplicationDraft, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::AlreadyPending);
        }
        if !self.active.is_last() {
            return Err(SubmitRejection::NotOnFinalSection);
        }

        for section in Section::ALL {
            let errors = self.validate_section(section);
            if errors > 0 {
                if section != self.active {
                    self.set_active(section);
                }
                return Err(SubmitRejection::Invalid { section, errors });
            }
        }

        self.submission = SubmissionStatus::Pending;
        Ok(self.draft())
    }

    /// Record a successful submission. Values are kept.
    pub fn complete_submission(&mut self, receipt: SubmissionReceipt) {
        self.submission = SubmissionStatus::Succeeded(receipt);
    }

    pub fn fail_submission(&mut self, message: impl Into<String>) {
        self.submission = SubmissionStatus::Failed(message.into());
    }

    /// Drop a pending submission; returns false when nothing was pending
    pub fn cancel_submission(&mut self) -> bool {
        if self.is_submitting() {
            self.submission = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    const ESSAY: &str =
        "I want to measure how air pollution in Almaty changes across the winter months.";

    fn fill_personal(wizard: &mut ApplicationWizard) {
        wizard.set_text(FieldId::Email, "a@b.com");
        wizard.set_text(FieldId::FullName, "John Doe");
        wizard.set_text(FieldId::City, "Almaty");
        wizard.set_text(FieldId::Country, "Kazakhstan");
        wizard.set_text(FieldId::Phone, "+77011234567");
    }

    /// A wizard with every required field valid, still on Personal
    pub(crate) fn filled_wizard() -> ApplicationWizard {
        let mut wizard = ApplicationWizard::new();
        fill_personal(&mut wizard);
        wizard.set_text(FieldId::School, "NIS Almaty");
        wizard.set_text(FieldId::Grade, "11");
        wizard.set_text(FieldId::ParentName, "Jane Doe");
        wizard.set_text(FieldId::ParentEmail, "jane@example.com");
        wizard.set_text(FieldId::ParentPhone, "+77017654321");
        wizard.toggle_interest("Environmental Science");
        wizard.set_text(FieldId::ResearchInterest, ESSAY);
        wizard.set_text(FieldId::Motivation, ESSAY);
        wizard
    }

    pub(crate) fn wizard_on_additional() -> ApplicationWizard {
        let mut wizard = filled_wizard();
        assert!(matches!(
            wizard.select(Section::Additional),
            Transition::Moved { .. }
        ));
        wizard
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_personal() {
            let wizard = ApplicationWizard::new();
            assert_eq!(wizard.active_section(), Section::Personal);
            assert_eq!(wizard.focus(), Focus::Field(FieldId::FullName));
            assert_eq!(*wizard.submission(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_next_from_empty_personal_is_blocked() {
            let mut wizard = ApplicationWizard::new();
            let result = wizard.next();
            assert_eq!(
                result,
                Transition::Blocked {
                    section: Section::Personal,
                    errors: 5
                }
            );
            assert_eq!(wizard.active_section(), Section::Personal);
            for id in [
                FieldId::Email,
                FieldId::FullName,
                FieldId::City,
                FieldId::Country,
                FieldId::Phone,
            ] {
                assert!(wizard.error(id).is_some(), "{id:?}");
            }
        }

        #[test]
        fn test_next_after_filling_personal_moves_to_academic() {
            let mut wizard = ApplicationWizard::new();
            wizard.next();
            fill_personal(&mut wizard);
            assert_eq!(
                wizard.next(),
                Transition::Moved {
                    from: Section::Personal,
                    to: Section::Academic
                }
            );
            assert_eq!(wizard.active_section(), Section::Academic);
            assert_eq!(wizard.section_error_count(Section::Personal), 0);
        }

        #[test]
        fn test_each_invalid_section_blocks_next() {
            let mut wizard = filled_wizard();
            let breakers: [(Section, FieldId); 4] = [
                (Section::Personal, FieldId::Email),
                (Section::Academic, FieldId::School),
                (Section::Parent, FieldId::ParentPhone),
                (Section::Research, FieldId::Motivation),
            ];
            for (section, field) in breakers {
                wizard.select(section);
                let saved = wizard.text(field).to_string();
                wizard.set_text(field, "");
                assert!(matches!(wizard.next(), Transition::Blocked { .. }));
                assert_eq!(wizard.active_section(), section);
                assert!(wizard.error(field).is_some());
                wizard.set_text(field, saved);
            }
        }

        #[test]
        fn test_each_valid_section_advances_exactly_once() {
            let mut wizard = filled_wizard();
            for pair in Section::ALL.windows(2) {
                assert_eq!(wizard.active_section(), pair[0]);
                assert_eq!(
                    wizard.next(),
                    Transition::Moved {
                        from: pair[0],
                        to: pair[1]
                    }
                );
            }
            assert_eq!(wizard.next(), Transition::Unchanged);
            assert_eq!(wizard.active_section(), Section::Additional);
        }

        #[test]
        fn test_blocked_research_requires_interest() {
            let mut wizard = filled_wizard();
            wizard.toggle_interest("Environmental Science");
            wizard.select(Section::Research);
            assert!(matches!(wizard.next(), Transition::Blocked { .. }));
            assert_eq!(
                wizard.error(FieldId::FieldsOfInterest),
                Some("Select at least one field of interest")
            );
        }

        #[test]
        fn test_previous_always_succeeds_and_keeps_values() {
            let mut wizard = wizard_on_additional();
            let before = wizard.draft();
            while wizard.active_section() != Section::Personal {
                assert!(matches!(wizard.previous(), Transition::Moved { .. }));
                assert_eq!(wizard.draft(), before);
            }
            assert_eq!(wizard.previous(), Transition::Unchanged);
        }

        #[test]
        fn test_previous_ignores_invalid_section() {
            let mut wizard = filled_wizard();
            wizard.next();
            wizard.set_text(FieldId::School, "");
            assert!(matches!(wizard.previous(), Transition::Moved { .. }));
            assert_eq!(wizard.active_section(), Section::Personal);
        }

        #[test]
        fn test_backward_select_is_free() {
            let mut wizard = wizard_on_additional();
            wizard.set_text(FieldId::ReferralSource, "friend");
            assert_eq!(
                wizard.select(Section::Academic),
                Transition::Moved {
                    from: Section::Additional,
                    to: Section::Academic
                }
            );
        }

        #[test]
        fn test_forward_select_stops_at_first_invalid_section() {
            let mut wizard = filled_wizard();
            wizard.set_text(FieldId::ParentEmail, "not-an-email");
            assert_eq!(
                wizard.select(Section::Activities),
                Transition::Blocked {
                    section: Section::Parent,
                    errors: 1
                }
            );
            assert_eq!(wizard.active_section(), Section::Parent);
            assert_eq!(
                wizard.error(FieldId::ParentEmail),
                Some("Please enter a valid email address")
            );
        }

        #[test]
        fn test_forward_select_from_invalid_current_stays() {
            let mut wizard = ApplicationWizard::new();
            assert_eq!(
                wizard.select(Section::Research),
                Transition::Blocked {
                    section: Section::Personal,
                    errors: 5
                }
            );
            assert_eq!(wizard.active_section(), Section::Personal);
        }

        #[test]
        fn test_select_same_section_is_unchanged() {
            let mut wizard = ApplicationWizard::new();
            assert_eq!(wizard.select(Section::Personal), Transition::Unchanged);
        }

        #[test]
        fn test_section_change_resets_focus_and_action() {
            let mut wizard = filled_wizard();
            wizard.next_focus();
            wizard.next();
            assert_eq!(wizard.focus(), Focus::Field(FieldId::School));
            assert_eq!(wizard.selected_action(), WizardAction::Next);
        }

        #[test]
        fn test_tab_scroll_follows_active_section() {
            let mut wizard = filled_wizard();
            assert_eq!(wizard.tab_scroll_offset(), 0);
            wizard.next();
            assert_eq!(wizard.tab_scroll_offset(), Section::Academic.tab_scroll_offset());
            wizard.select(Section::Personal);
            assert_eq!(wizard.tab_scroll_offset(), 0);
        }
    }

    mod field_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blur_validates_left_field() {
            let mut wizard = ApplicationWizard::new();
            wizard.next_focus();
            assert_eq!(wizard.error(FieldId::FullName), Some("Full name is required"));
            assert!(wizard.error(FieldId::Email).is_none());
        }

        #[test]
        fn test_change_revalidates_flagged_field() {
            let mut wizard = ApplicationWizard::new();
            wizard.next_focus();
            wizard.prev_focus();
            for c in "Jo".chars() {
                wizard.input_char(c);
            }
            assert!(wizard.error(FieldId::FullName).is_none());
            wizard.backspace();
            assert_eq!(
                wizard.error(FieldId::FullName),
                Some("Full name must be at least 2 characters")
            );
        }

        #[test]
        fn test_change_does_not_validate_untouched_field() {
            let mut wizard = ApplicationWizard::new();
            wizard.input_char('J');
            assert!(wizard.error(FieldId::FullName).is_none());
        }

        #[test]
        fn test_toggle_interest_clears_error() {
            let mut wizard = ApplicationWizard::new();
            wizard.validate_field(FieldId::FieldsOfInterest);
            assert!(wizard.error(FieldId::FieldsOfInterest).is_some());
            wizard.toggle_interest("Physics");
            assert!(wizard.error(FieldId::FieldsOfInterest).is_none());
        }

        #[test]
        fn test_toggle_at_cursor_revalidates() {
            let mut wizard = ApplicationWizard::new();
            wizard.validate_field(FieldId::FieldsOfInterest);
            wizard.move_interest_cursor(2);
            assert_eq!(wizard.toggle_interest_at_cursor(), ToggleOutcome::Selected);
            assert!(wizard.error(FieldId::FieldsOfInterest).is_none());

            assert_eq!(wizard.toggle_interest_at_cursor(), ToggleOutcome::Deselected);
            assert!(wizard.error(FieldId::FieldsOfInterest).is_some());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_focus_cycles_through_action_row() {
            let mut wizard = ApplicationWizard::new();
            for _ in 0..Section::Personal.fields().len() {
                wizard.next_focus();
            }
            assert_eq!(wizard.focus(), Focus::Actions);
            wizard.next_focus();
            assert_eq!(wizard.focus(), Focus::Field(FieldId::FullName));
            wizard.prev_focus();
            assert_eq!(wizard.focus(), Focus::Actions);
        }

        #[test]
        fn test_typing_on_action_row_is_ignored() {
            let mut wizard = ApplicationWizard::new();
            wizard.prev_focus();
            wizard.input_char('x');
            assert_eq!(wizard.draft(), ApplicationDraft::default());
        }

        #[test]
        fn test_newline_only_in_multiline() {
            let mut wizard = filled_wizard();
            wizard.input_newline();
            assert_eq!(wizard.text(FieldId::FullName), "John Doe");

            wizard.select(Section::Research);
            wizard.focus_field(FieldId::Motivation);
            wizard.input_newline();
            assert!(wizard.text(FieldId::Motivation).ends_with('\n'));
        }

        #[test]
        fn test_activity_input_goes_to_buffer() {
            let mut wizard = filled_wizard();
            wizard.select(Section::Activities);
            assert_eq!(wizard.focus(), Focus::Field(FieldId::Extracurriculars));
            for c in "Chess".chars() {
                wizard.input_char(c);
            }
            assert_eq!(wizard.activities().input, "Chess");
            assert_eq!(wizard.commit_activity_input(), AddOutcome::Added);
            assert_eq!(wizard.activities().entries(), &["Chess".to_string()]);
            assert!(wizard.activities().input.is_empty());
        }

        #[test]
        fn test_six_activities_keep_five() {
            let mut wizard = ApplicationWizard::new();
            let outcomes: Vec<_> = (0..6)
                .map(|i| wizard.add_activity(&format!("Activity {i}")))
                .collect();
            assert_eq!(wizard.activities().len(), 5);
            assert_eq!(outcomes[5], AddOutcome::AtCapacity);
        }

        #[test]
        fn test_four_interests_keep_three() {
            let mut wizard = ApplicationWizard::new();
            let outcomes: Vec<_> = ["Biology", "Physics", "History", "Economics"]
                .iter()
                .map(|n| wizard.toggle_interest(n))
                .collect();
            assert_eq!(outcomes[3], ToggleOutcome::AtCapacity);
            assert_eq!(wizard.interests().selected(), &["Biology", "Physics", "History"]);
        }

        #[test]
        fn test_toggle_flag_only_on_flags() {
            let mut wizard = ApplicationWizard::new();
            assert!(!wizard.toggle_flag(FieldId::FullName));
            assert!(wizard.toggle_flag(FieldId::FinancialAid));
            assert!(wizard.flag(FieldId::FinancialAid));
        }

        #[test]
        fn test_action_selection_wraps() {
            let mut wizard = filled_wizard();
            wizard.next();
            assert_eq!(wizard.actions(), &[WizardAction::Previous, WizardAction::Next]);
            wizard.select_next_action();
            assert_eq!(wizard.selected_action(), WizardAction::Previous);
            wizard.select_prev_action();
            assert_eq!(wizard.selected_action(), WizardAction::Next);
        }

        #[test]
        fn test_financial_aid_notice_toggles() {
            let mut wizard = wizard_on_additional();
            assert!(!wizard.shows_financial_aid_notice());
            wizard.toggle_flag(FieldId::FinancialAid);
            assert!(wizard.shows_financial_aid_notice());
            wizard.toggle_flag(FieldId::FinancialAid);
            assert!(!wizard.shows_financial_aid_notice());
        }

        #[test]
        fn test_financial_aid_notice_only_on_additional() {
            let mut wizard = ApplicationWizard::new();
            wizard.toggle_flag(FieldId::FinancialAid);
            assert!(!wizard.shows_financial_aid_notice());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_only_from_additional() {
            let mut wizard = filled_wizard();
            assert_eq!(wizard.begin_submit(), Err(SubmitRejection::NotOnFinalSection));
            assert_eq!(*wizard.submission(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_submit_assembles_draft() {
            let mut wizard = wizard_on_additional();
            wizard.add_activity("Robotics");
            wizard.toggle_flag(FieldId::FinancialAid);
            let draft = wizard.begin_submit().unwrap();
            assert_eq!(draft.full_name, "John Doe");
            assert_eq!(draft.fields_of_interest, vec!["Environmental Science"]);
            assert_eq!(draft.extracurriculars, vec!["Robotics"]);
            assert!(draft.financial_aid);
            assert!(wizard.is_submitting());
        }

        #[test]
        fn test_second_submit_rejected_while_pending() {
            let mut wizard = wizard_on_additional();
            assert!(wizard.begin_submit().is_ok());
            assert_eq!(wizard.begin_submit(), Err(SubmitRejection::AlreadyPending));
        }

        #[test]
        fn test_submit_jumps_to_first_invalid_section() {
            let mut wizard = wizard_on_additional();
            wizard.set_text(FieldId::ParentName, "J");
            assert_eq!(
                wizard.begin_submit(),
                Err(SubmitRejection::Invalid {
                    section: Section::Parent,
                    errors: 1
                })
            );
            assert_eq!(wizard.active_section(), Section::Parent);
            assert!(!wizard.is_submitting());
        }

        #[test]
        fn test_success_keeps_values() {
            let mut wizard = wizard_on_additional();
            let draft = wizard.begin_submit().unwrap();
            let receipt = SubmissionReceipt::new();
            wizard.complete_submission(receipt.clone());
            assert_eq!(*wizard.submission(), SubmissionStatus::Succeeded(receipt));
            assert_eq!(wizard.draft(), draft);
        }

        #[test]
        fn test_failure_allows_retry() {
            let mut wizard = wizard_on_additional();
            wizard.begin_submit().unwrap();
            wizard.fail_submission("network down");
            assert_eq!(
                *wizard.submission(),
                SubmissionStatus::Failed("network down".to_string())
            );
            assert!(wizard.begin_submit().is_ok());
        }

        #[test]
        fn test_cancel_only_when_pending() {
            let mut wizard = wizard_on_additional();
            assert!(!wizard.cancel_submission());
            wizard.begin_submit().unwrap();
            assert!(wizard.cancel_submission());
            assert_eq!(*wizard.submission(), SubmissionStatus::Idle);
        }
    }
}
