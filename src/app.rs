//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AddOutcome, AppState, ApplicationWizard, FieldId, FieldKind, Focus, LandingState,
    PublicationLink, Section, SubmitRejection, ToastLevel, ToggleOutcome, Transition, View,
    WizardAction, MAX_ACTIVITIES, MAX_INTERESTS,
};
use crate::submission::{StubSubmissionSink, SubmissionSink, SubmissionTask};
use crate::ui::forms::INTEREST_COLUMNS;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where completed applications are sent
    sink: Arc<dyn SubmissionSink>,
    /// In-flight submission, if any
    pending: Option<SubmissionTask>,
    /// Landing page animation state
    pub landing: LandingState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the stub sink
    pub fn new(config: &TuiConfig) -> Self {
        let sink = StubSubmissionSink::new(config.submit_delay());
        Self::with_sink(config, Arc::new(sink))
    }

    pub fn with_sink(config: &TuiConfig, sink: Arc<dyn SubmissionSink>) -> Self {
        let mut landing = LandingState::new(config.marquee_speed());
        if config.skip_intro() {
            landing.skip();
        }

        Self {
            state: AppState::with_toast_duration(config.toast_duration()),
            sink,
            pending: None,
            landing,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the landing animation still needs fast redraws
    pub fn is_animating(&self) -> bool {
        matches!(self.state.current_view, View::Landing)
    }

    /// Drop expired toasts
    pub fn tick(&mut self) {
        self.state.notifications.prune();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Esc clears the newest toast before it acts on the view
        if key.code == KeyCode::Esc
            && !self.state.notifications.is_empty()
            && !self.state.wizard.is_submitting()
        {
            self.state.notifications.dismiss();
            return Ok(());
        }

        match self.state.current_view {
            View::Landing => self.handle_landing_key(key),
            View::Apply => self.handle_apply_key(key),
            View::Publications => self.handle_publications_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.enter(view);
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.enter(view);
        }
    }

    fn enter(&mut self, view: View) {
        if view == View::Landing {
            self.landing.restart();
        }
        // The draft lives only while the wizard is open
        if self.state.current_view == View::Apply
            && view != View::Apply
            && !self.state.wizard.is_submitting()
        {
            tracing::debug!("Discarding application draft");
            self.state.wizard = ApplicationWizard::new();
        }
        tracing::debug!("View {:?} -> {view:?}", self.state.current_view);
        self.state.current_view = view;
    }

    /// Handle keys on the landing page
    fn handle_landing_key(&mut self, key: KeyEvent) {
        // First key only finishes the headline reveal
        if !self.landing.is_revealed() {
            self.landing.skip();
            return;
        }

        match key.code {
            KeyCode::Char('a') | KeyCode::Enter => self.navigate(View::Apply),
            KeyCode::Char('p') => self.navigate(View::Publications),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in Publications view
    fn handle_publications_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.publications.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.publications.select_next(),
            KeyCode::Char('c') | KeyCode::Enter => self.copy_link(PublicationLink::Paper),
            KeyCode::Char('s') => self.copy_link(PublicationLink::Presentation),
            KeyCode::Char('a') => self.navigate(View::Apply),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => self.go_back(),
            _ => {}
        }
    }

    fn copy_link(&mut self, kind: PublicationLink) {
        let Some(publication) = self.state.publications.current() else {
            return;
        };
        let link = publication.link(kind);
        match copy_to_clipboard(link) {
            Ok(()) => self.state.notify(
                ToastLevel::Success,
                format!("{} link copied", kind.label()),
                link,
            ),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.state
                    .notify(ToastLevel::Error, "Could not copy link", e.to_string());
            }
        }
    }

    /// Handle keys in the application wizard
    fn handle_apply_key(&mut self, key: KeyEvent) {
        if self.state.wizard.is_submitting() {
            if key.code == KeyCode::Esc {
                self.cancel_submission();
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('n') => {
                    let transition = self.state.wizard.next();
                    self.report_transition(transition);
                }
                KeyCode::Char('p') => {
                    self.state.wizard.previous();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => return self.state.wizard.next_focus(),
            KeyCode::BackTab => return self.state.wizard.prev_focus(),
            KeyCode::F(n) => {
                if let Some(section) = Section::from_index(usize::from(n).wrapping_sub(1)) {
                    let transition = self.state.wizard.select(section);
                    self.report_transition(transition);
                }
                return;
            }
            KeyCode::Esc => return self.go_back(),
            _ => {}
        }

        match self.state.wizard.focus() {
            Focus::Actions => self.handle_action_row_key(key),
            Focus::Field(id) => match id.kind() {
                FieldKind::Selection => self.handle_interests_key(key),
                FieldKind::List => self.handle_activities_key(key),
                FieldKind::Flag => {
                    if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                        self.state.wizard.toggle_flag(id);
                    }
                }
                FieldKind::Text | FieldKind::Multiline => self.handle_text_key(id, key),
            },
        }
    }

    fn handle_text_key(&mut self, id: FieldId, key: KeyEvent) {
        let wizard = &mut self.state.wizard;
        match key.code {
            KeyCode::Char(c) => wizard.input_char(c),
            KeyCode::Backspace => wizard.backspace(),
            KeyCode::Enter if id.is_multiline() => wizard.input_newline(),
            KeyCode::Enter | KeyCode::Down => wizard.next_focus(),
            KeyCode::Up => wizard.prev_focus(),
            _ => {}
        }
    }

    fn handle_interests_key(&mut self, key: KeyEvent) {
        let columns = INTEREST_COLUMNS as isize;
        match key.code {
            KeyCode::Left => self.state.wizard.move_interest_cursor(-1),
            KeyCode::Right => self.state.wizard.move_interest_cursor(1),
            KeyCode::Up => self.state.wizard.move_interest_cursor(-columns),
            KeyCode::Down => self.state.wizard.move_interest_cursor(columns),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.state.wizard.toggle_interest_at_cursor() == ToggleOutcome::AtCapacity {
                    self.state.notify(
                        ToastLevel::Warning,
                        "Limit reached",
                        format!("Choose at most {MAX_INTERESTS} fields of interest"),
                    );
                }
            }
            _ => {}
        }
    }

    fn handle_activities_key(&mut self, key: KeyEvent) {
        let wizard = &mut self.state.wizard;
        match key.code {
            KeyCode::Char(c) => wizard.input_char(c),
            KeyCode::Backspace => wizard.backspace(),
            KeyCode::Enter => {
                if wizard.commit_activity_input() == AddOutcome::AtCapacity {
                    self.state.notify(
                        ToastLevel::Warning,
                        "Limit reached",
                        format!("You can list at most {MAX_ACTIVITIES} activities"),
                    );
                }
            }
            KeyCode::Up => wizard.select_prev_activity(),
            KeyCode::Down => wizard.select_next_activity(),
            KeyCode::Delete => {
                wizard.remove_selected_activity();
            }
            _ => {}
        }
    }

    fn handle_action_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.wizard.select_prev_action(),
            KeyCode::Right => self.state.wizard.select_next_action(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                match self.state.wizard.selected_action() {
                    WizardAction::Previous => {
                        self.state.wizard.previous();
                    }
                    WizardAction::Next => {
                        let transition = self.state.wizard.next();
                        self.report_transition(transition);
                    }
                    WizardAction::Submit => self.submit(),
                }
            }
            _ => {}
        }
    }

    fn report_transition(&mut self, transition: Transition) {
        if let Transition::Blocked { section, errors } = transition {
            self.state.notify(
                ToastLevel::Warning,
                format!("Please fix {}", problems(errors)),
                format!("{} section", section.title()),
            );
        }
    }

    /// Validate everything and hand the draft to the sink in the background
    pub fn submit(&mut self) {
        match self.state.wizard.begin_submit() {
            Ok(draft) => {
                tracing::info!("Submitting application for {}", draft.email);
                self.pending = Some(SubmissionTask::spawn(Arc::clone(&self.sink), draft));
            }
            Err(SubmitRejection::NotOnFinalSection) => self.state.notify(
                ToastLevel::Info,
                "Not finished yet",
                "Submit from the Additional section",
            ),
            Err(SubmitRejection::AlreadyPending) => self.state.notify(
                ToastLevel::Warning,
                "Submission in progress",
                "Press Esc to cancel",
            ),
            Err(SubmitRejection::Invalid { section, errors }) => {
                self.report_transition(Transition::Blocked { section, errors })
            }
        }
    }

    pub fn cancel_submission(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
        if self.state.wizard.cancel_submission() {
            tracing::info!("Submission cancelled");
            self.state
                .notify(ToastLevel::Info, "Submission cancelled", "");
        }
    }

    pub fn is_submission_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Collect the outcome of a finished submission
    pub async fn poll_submission(&mut self) {
        let Some(task) = self.pending.as_mut() else {
            return;
        };
        let Some(result) = task.poll().await else {
            return;
        };
        self.pending = None;

        match result {
            Ok(receipt) => {
                let reference = receipt.reference();
                tracing::info!("Application accepted, reference {reference}");
                self.state.wizard.complete_submission(receipt);
                self.state.notify(
                    ToastLevel::Success,
                    "Application submitted",
                    format!("Reference {reference}"),
                );
            }
            Err(e) => {
                tracing::warn!("Submission failed: {e}");
                self.state.wizard.fail_submission(e.to_string());
                self.state
                    .notify(ToastLevel::Error, "Submission failed", e.to_string());
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

fn problems(count: usize) -> String {
    if count == 1 {
        "1 problem".to_string()
    } else {
        format!("{count} problems")
    }
}
