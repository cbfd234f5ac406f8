//! Application state definitions

use super::enrollment::{progress_fraction, EnrollmentWizard, FieldKey, FieldKind, Step};
use super::forms::LoginForm;
use super::progress::ProgressAnimation;
use super::session::Session;
use std::collections::VecDeque;
use std::time::Instant;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page with the school banner
    #[default]
    Home,
    Enrollment,
    Login,
    Dashboard,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Beranda",
            Self::Enrollment => "Formulir PPDB",
            Self::Login => "Login Staf",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// Entries of the landing page menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    Enroll,
    Login,
    Quit,
}

impl HomeAction {
    pub const ALL: [HomeAction; 3] = [HomeAction::Enroll, HomeAction::Login, HomeAction::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Enroll => "Daftar Sekarang",
            Self::Login => "Login Staf",
            Self::Quit => "Keluar",
        }
    }
}

/// Which button of the confirmation dialog is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    Cancel,
    #[default]
    Confirm,
}

impl DialogButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Cancel => Self::Confirm,
            Self::Confirm => Self::Cancel,
        };
    }
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,
    pub home_index: usize,

    // Enrollment
    pub wizard: EnrollmentWizard,
    pub active_field: usize,
    /// Path typed into the focused document field, not yet attached
    pub file_input: String,
    pub dialog_button: DialogButton,
    pub progress: ProgressAnimation,

    // Staff area
    pub login_form: LoginForm,
    pub session: Option<Session>,
    pub dashboard_index: usize,

    // UI state
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EnrollmentWizard::default())
    }
}

impl AppState {
    pub fn new(wizard: EnrollmentWizard) -> Self {
        let fraction = progress_fraction(wizard.current_step().ordinal(), Step::COUNT);
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            home_index: 0,
            wizard,
            active_field: 0,
            file_input: String::new(),
            dialog_button: DialogButton::default(),
            progress: ProgressAnimation::new(fraction, Instant::now()),
            login_form: LoginForm::default(),
            session: None,
            dashboard_index: 0,
            status_message: None,
            error_queue: VecDeque::new(),
        }
    }

    /// Fields shown on the wizard's current step, in display order
    pub fn step_fields(&self) -> Vec<FieldKey> {
        FieldKey::for_step(self.wizard.current_step()).collect()
    }

    pub fn active_field_key(&self) -> Option<FieldKey> {
        self.step_fields().get(self.active_field).copied()
    }

    pub fn is_file_field_active(&self) -> bool {
        self.active_field_key()
            .is_some_and(|key| key.kind() == FieldKind::File)
    }

    /// Move to next form field
    pub fn next_field(&mut self) {
        let count = self.step_fields().len();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
        }
        self.file_input.clear();
    }

    /// Move to previous form field
    pub fn prev_field(&mut self) {
        let count = self.step_fields().len();
        if count == 0 {
            return;
        }
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
        self.file_input.clear();
    }

    /// Focus a field by key if it is on the current step
    pub fn focus_field(&mut self, key: FieldKey) {
        if let Some(index) = self.step_fields().iter().position(|k| *k == key) {
            self.active_field = index;
            self.file_input.clear();
        }
    }

    /// Reset the cursor after the wizard changed step
    pub fn on_step_changed(&mut self, now: Instant) {
        self.active_field = 0;
        self.file_input.clear();
        let fraction = progress_fraction(self.wizard.current_step().ordinal(), Step::COUNT);
        self.progress.retarget(fraction, now);
    }

    /// Move home menu selection down
    pub fn move_home_down(&mut self) {
        if self.home_index + 1 < HomeAction::ALL.len() {
            self.home_index += 1;
        }
    }

    /// Move home menu selection up
    pub fn move_home_up(&mut self) {
        self.home_index = self.home_index.saturating_sub(1);
    }

    pub fn selected_home_action(&self) -> HomeAction {
        HomeAction::ALL[self.home_index.min(HomeAction::ALL.len() - 1)]
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_step_fields_follow_wizard_step() {
            let state = AppState::default();
            assert_eq!(state.step_fields().len(), 7);
            assert_eq!(state.active_field_key(), Some(FieldKey::FullName));
        }

        #[test]
        fn test_field_cursor_wraps() {
            let mut state = AppState::default();
            state.prev_field();
            assert_eq!(state.active_field_key(), Some(FieldKey::Phone));
            state.next_field();
            assert_eq!(state.active_field_key(), Some(FieldKey::FullName));
        }

        #[test]
        fn test_moving_clears_file_input() {
            let mut state = AppState::default();
            state.file_input.push_str("/tmp/a.pdf");
            state.next_field();
            assert!(state.file_input.is_empty());
        }

        #[test]
        fn test_step_change_resets_cursor_and_retargets_gauge() {
            let mut state = AppState::default();
            state.active_field = 3;
            state.wizard.request_advance();
            state.wizard.confirm();

            let now = Instant::now();
            state.on_step_changed(now);
            assert_eq!(state.active_field, 0);
            assert_eq!(state.active_field_key(), Some(FieldKey::PreviousSchool));
            assert!((state.progress.target() - 1.0 / 3.0).abs() < 1e-9);
        }

        #[test]
        fn test_focus_field_ignores_other_steps() {
            let mut state = AppState::default();
            state.focus_field(FieldKey::Address);
            assert_eq!(state.active_field_key(), Some(FieldKey::Address));
            state.focus_field(FieldKey::Photo);
            assert_eq!(state.active_field_key(), Some(FieldKey::Address));
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("a".to_string());
            state.push_error("b".to_string());
            assert_eq!(state.current_error(), Some("a"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("b"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }

    #[test]
    fn test_home_menu_bounds() {
        let mut state = AppState::default();
        state.move_home_up();
        assert_eq!(state.selected_home_action(), HomeAction::Enroll);
        for _ in 0..5 {
            state.move_home_down();
        }
        assert_eq!(state.selected_home_action(), HomeAction::Quit);
    }
}
