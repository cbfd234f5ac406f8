//! Application state and core logic

use crate::auth::{AuthPort, InMemoryAuthenticator, SessionStore};
use crate::config::AppConfig;
use crate::state::enrollment::{
    ConfirmOutcome, EnrollmentPayload, EnrollmentWizard, FieldKey, FieldKind, FieldValue, FileRef,
    RequestOutcome, TransitionKind,
};
use crate::state::{
    menu_label, AppState, DialogButton, Form, HomeAction, LoginForm, RoleMenuConfig, View,
    LOGIN_EMAIL,
};
use crate::submission::{EnrollmentSubmitter, LoggingSubmitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Route every role needs before the dashboard opens
const DASHBOARD_ROUTE: &str = "/dashboard";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    auth: Box<dyn AuthPort>,
    submitter: Box<dyn EnrollmentSubmitter>,
    session_store: Option<SessionStore>,
    role_menus: RoleMenuConfig,
    /// Confirmed payload waiting for a frame to show the loading dialog
    pending_submission: Option<EnrollmentPayload>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app from configuration with the in-memory authenticator and logging submitter
    pub fn new(config: &AppConfig) -> Self {
        let wizard =
            EnrollmentWizard::new(config.validation_policy(), config.notification_delay());
        Self::with_ports(
            AppState::new(wizard),
            Box::new(InMemoryAuthenticator::new(config.accounts())),
            Box::new(LoggingSubmitter::new(config.api_base_url())),
            config.role_menus(),
            SessionStore::default_location(),
        )
    }

    pub fn with_ports(
        state: AppState,
        auth: Box<dyn AuthPort>,
        submitter: Box<dyn EnrollmentSubmitter>,
        role_menus: RoleMenuConfig,
        session_store: Option<SessionStore>,
    ) -> Self {
        Self {
            state,
            auth,
            submitter,
            session_store,
            role_menus,
            pending_submission: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Routes the signed-in user may open, empty when signed out
    pub fn permitted_routes(&self) -> &[String] {
        match &self.state.session {
            Some(session) => self.role_menus.routes(session.role()),
            None => &[],
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the next frames need a fast redraw
    pub fn is_animating(&self, now: Instant) -> bool {
        self.state.progress.is_animating(now) || self.state.wizard.toast().is_visible()
    }

    /// Advance time-driven state
    pub fn tick(&mut self, now: Instant) {
        if self.state.wizard.tick(now) {
            tracing::debug!("success notification auto-dismissed");
        }
    }

    /// Send the payload queued by the last confirmed submit dialog.
    ///
    /// Returns false when nothing was queued.
    pub async fn process_submission(&mut self) -> bool {
        let Some(payload) = self.pending_submission.take() else {
            return false;
        };
        let result = self.submitter.submit(&payload).await;
        self.state
            .wizard
            .complete_submission(result, Instant::now());
        true
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Enrollment => self.handle_enrollment_key(key)?,
            View::Login => self.handle_login_key(key).await?,
            View::Dashboard => self.handle_dashboard_key(key),
        }
        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        self.state.current_view = self.state.view_history.pop().unwrap_or_default();
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_home_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_home_down(),
            KeyCode::Char('d') => self.open_home_action(HomeAction::Enroll),
            KeyCode::Char('l') => self.open_home_action(HomeAction::Login),
            KeyCode::Char('q') => self.open_home_action(HomeAction::Quit),
            KeyCode::Enter => self.open_home_action(self.state.selected_home_action()),
            _ => {}
        }
    }

    fn open_home_action(&mut self, action: HomeAction) {
        match action {
            HomeAction::Enroll => self.navigate(View::Enrollment),
            HomeAction::Login => {
                let remembered = self
                    .session_store
                    .as_ref()
                    .and_then(|store| match store.last_email() {
                        Ok(email) => email,
                        Err(err) => {
                            tracing::warn!(error = %err, "could not read remembered login");
                            None
                        }
                    });
                self.state.login_form = match remembered {
                    Some(email) => LoginForm::with_remembered_email(email),
                    None => LoginForm::new(),
                };
                self.navigate(View::Login);
            }
            HomeAction::Quit => self.quit = true,
        }
    }

    fn handle_enrollment_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.wizard.dialog().is_some() {
            return self.handle_confirm_dialog_key(key);
        }

        if self.state.wizard.failure().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.wizard.dismiss_failure();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl => self.request(TransitionKind::Advance),
            KeyCode::Char('p') if ctrl => self.request(TransitionKind::Retreat),
            KeyCode::Char('s') if ctrl => self.request(TransitionKind::Submit),
            KeyCode::PageDown => self.request(TransitionKind::Advance),
            KeyCode::PageUp => self.request(TransitionKind::Retreat),
            KeyCode::Esc => {
                if !self.state.wizard.dismiss_success() {
                    self.go_back();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            _ => {
                if let Some(field) = self.state.active_field_key() {
                    self.edit_field(field, key);
                }
            }
        }
        Ok(())
    }

    fn request(&mut self, kind: TransitionKind) {
        let wizard = &mut self.state.wizard;
        let outcome = match kind {
            TransitionKind::Advance => wizard.request_advance(),
            TransitionKind::Retreat => wizard.request_retreat(),
            TransitionKind::Submit => wizard.request_submit(),
        };

        match outcome {
            RequestOutcome::Opened(_) => self.state.dialog_button = DialogButton::Confirm,
            RequestOutcome::Blocked(errors) => {
                let current = self.state.wizard.current_step();
                match errors.first_step() {
                    Some(step) if step != current => {
                        self.state.status_message = Some(format!(
                            "Periksa kembali Langkah {}: {}",
                            step.ordinal(),
                            step.descriptor().label
                        ));
                    }
                    _ => {
                        if let Some(first) = errors.iter().next() {
                            self.state.focus_field(first.field);
                        }
                        self.state.status_message =
                            Some(format!("{} data perlu diperbaiki", errors.len()));
                    }
                }
            }
            RequestOutcome::Ignored => {
                if kind == TransitionKind::Submit && !self.state.wizard.current_step().is_last() {
                    self.state.status_message =
                        Some("Pendaftaran dikirim dari langkah terakhir".to_string());
                }
            }
        }
    }

    /// Route a key to the focused wizard field
    fn edit_field(&mut self, field: FieldKey, key: KeyEvent) {
        let form = self.state.wizard.form();
        let value = match (field.kind(), key.code) {
            (FieldKind::Text | FieldKind::Multiline | FieldKind::Score, KeyCode::Char(c)) => {
                let mut text = form.text(field).unwrap_or_default().to_string();
                text.push(c);
                FieldValue::Text(text)
            }
            (FieldKind::Text | FieldKind::Multiline | FieldKind::Score, KeyCode::Backspace) => {
                let mut text = form.text(field).unwrap_or_default().to_string();
                if text.pop().is_none() {
                    return;
                }
                FieldValue::Text(text)
            }
            (FieldKind::Multiline, KeyCode::Enter) => {
                let mut text = form.text(field).unwrap_or_default().to_string();
                text.push('\n');
                FieldValue::Text(text)
            }
            (FieldKind::Text | FieldKind::Score, KeyCode::Enter) => {
                self.state.next_field();
                return;
            }
            (FieldKind::Choice(_), KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter) => {
                form.get(field).cycled(true)
            }
            (FieldKind::Choice(_), KeyCode::Left) => form.get(field).cycled(false),
            (FieldKind::Flag, KeyCode::Char(' ') | KeyCode::Enter) => form.get(field).cycled(true),
            (FieldKind::File, _) => {
                self.edit_file_field(field, key);
                return;
            }
            _ => return,
        };

        match self.state.wizard.on_field_change(field, value) {
            Ok(()) => {}
            Err(err) if field.kind() == FieldKind::Score => {
                tracing::debug!(error = %err, "score keystroke rejected");
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn edit_file_field(&mut self, field: FieldKey, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.state.file_input.push(c),
            KeyCode::Backspace => {
                if self.state.file_input.pop().is_none()
                    && self.state.wizard.form().file(field).is_some()
                {
                    self.change_field(field, FieldValue::File(None));
                }
            }
            KeyCode::Enter => {
                let input = self.state.file_input.trim().to_string();
                if input.is_empty() {
                    return;
                }
                match FileRef::from_path(&input) {
                    Ok(file) => {
                        self.state.status_message =
                            Some(format!("{} dilampirkan", file.file_name));
                        self.state.file_input.clear();
                        self.change_field(field, FieldValue::File(Some(file)));
                    }
                    Err(err) => self.push_error(err.to_string()),
                }
            }
            _ => {}
        }
    }

    fn change_field(&mut self, field: FieldKey, value: FieldValue) {
        if let Err(err) = self.state.wizard.on_field_change(field, value) {
            self.push_error(err.to_string());
        }
    }

    fn handle_confirm_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => self.state.dialog_button.toggle(),
            KeyCode::Enter => match self.state.dialog_button {
                DialogButton::Confirm => self.confirm_transition(),
                DialogButton::Cancel => {
                    self.state.wizard.cancel();
                }
            },
            KeyCode::Char('y') => self.confirm_transition(),
            KeyCode::Char('n') | KeyCode::Esc => {
                self.state.wizard.cancel();
            }
            _ => {}
        }
        Ok(())
    }

    fn confirm_transition(&mut self) {
        match self.state.wizard.confirm() {
            ConfirmOutcome::Moved { .. } => self.state.on_step_changed(Instant::now()),
            ConfirmOutcome::Submitting(payload) => self.pending_submission = Some(payload),
            ConfirmOutcome::Ignored => {}
        }
    }

    async fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_role = self.state.login_form.is_role_active();
        let on_email = self.state.login_form.active_field() == LOGIN_EMAIL;

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.state.login_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login_form.prev_field(),
            KeyCode::Left if on_role => self.state.login_form.cycle_role(false),
            KeyCode::Right | KeyCode::Char(' ') if on_role => {
                self.state.login_form.cycle_role(true)
            }
            KeyCode::Enter if on_email => self.state.login_form.next_field(),
            KeyCode::Enter => self.sign_in().await,
            KeyCode::Char(c) => {
                if let Some(field) = self.state.login_form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.login_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn sign_in(&mut self) {
        let credentials = self.state.login_form.credentials();
        let result = self.auth.authenticate(&credentials).await;
        self.state.login_form.clear_password();

        match result {
            Ok(session) if !self.role_menus.is_permitted(session.role(), DASHBOARD_ROUTE) => {
                tracing::warn!(role = session.role().as_str(), "role has no dashboard access");
                self.push_error(format!(
                    "Peran {} tidak memiliki akses ke dashboard",
                    session.role().label()
                ));
            }
            Ok(session) => {
                if let Some(store) = &self.session_store {
                    if let Err(err) = store.remember(&session.user.email) {
                        tracing::warn!(error = %err, "could not remember login");
                    }
                }
                self.state.session = Some(session);
                self.state.dashboard_index = 0;
                self.navigate(View::Dashboard);
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let count = self.permitted_routes().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.dashboard_index = self.state.dashboard_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.dashboard_index + 1 < count {
                    self.state.dashboard_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(route) = self.permitted_routes().get(self.state.dashboard_index) {
                    self.state.status_message =
                        Some(format!("Modul {} belum tersedia", menu_label(route)));
                }
            }
            KeyCode::Char('o') | KeyCode::Esc => self.sign_out(),
            _ => {}
        }
    }

    fn sign_out(&mut self) {
        if let Some(session) = self.state.session.take() {
            tracing::info!(role = session.role().as_str(), "staff signed out");
        }
        if let Some(store) = &self.session_store {
            if let Err(err) = store.forget() {
                tracing::warn!(error = %err, "could not clear remembered login");
            }
        }
        self.state.view_history.clear();
        self.state.current_view = View::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, MockAuthPort};
    use crate::state::enrollment::{
        Step, SubmissionError, SubmissionReceipt, ValidationPolicy, WizardPhase,
        DEFAULT_DISMISS_DELAY,
    };
    use crate::state::{Role, Session, User};
    use crate::submission::MockEnrollmentSubmitter;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn build(auth: MockAuthPort, submitter: MockEnrollmentSubmitter, state: AppState) -> App {
        App::with_ports(
            state,
            Box::new(auth),
            Box::new(submitter),
            RoleMenuConfig::default(),
            None,
        )
    }

    fn enrollment_app(submitter: MockEnrollmentSubmitter) -> App {
        let mut app = build(MockAuthPort::new(), submitter, AppState::default());
        app.navigate(View::Enrollment);
        app
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn advance_to(app: &mut App, step: Step) {
        while app.state.wizard.current_step() != step {
            app.handle_key(ctrl('n')).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
        }
    }

    fn guru_session() -> Session {
        Session::new(User {
            id: "3".to_string(),
            name: "Budi Santoso, S.Pd".to_string(),
            email: "budi@smanusantara.sch.id".to_string(),
            role: Role::Guru,
        })
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_home_menu_opens_enrollment() {
            let mut app = build(
                MockAuthPort::new(),
                MockEnrollmentSubmitter::new(),
                AppState::default(),
            );
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Enrollment);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_quit_from_home() {
            let mut app = build(
                MockAuthPort::new(),
                MockEnrollmentSubmitter::new(),
                AppState::default(),
            );
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_go_back_with_empty_history_lands_home() {
            let mut app = build(
                MockAuthPort::new(),
                MockEnrollmentSubmitter::new(),
                AppState::default(),
            );
            app.state.current_view = View::Login;
            app.go_back();
            assert_eq!(app.state.current_view, View::Home);
        }
    }

    mod enrollment {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_merges_into_form() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            type_text(&mut app, "Budi").await;
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.wizard.form().full_name, "Bud");
            assert_eq!(app.state.wizard.form().nik, "");
        }

        #[tokio::test]
        async fn test_choice_field_cycles() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            app.state.focus_field(FieldKey::Gender);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(
                app.state.wizard.form().display_value(FieldKey::Gender),
                "Perempuan"
            );
        }

        #[tokio::test]
        async fn test_score_rejects_letters() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            advance_to(&mut app, Step::AcademicData).await;
            app.state.focus_field(FieldKey::ExamScore);
            type_text(&mut app, "8x5.5").await;
            assert_eq!(app.state.wizard.form().exam_score, "85.5");
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_advance_confirm_resets_cursor() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(ctrl('n')).await.unwrap();
            assert!(app.state.wizard.state().dialog_open);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.current_step(), Step::AcademicData);
            assert_eq!(app.state.active_field, 0);
        }

        #[tokio::test]
        async fn test_cancel_button_keeps_step() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            app.handle_key(ctrl('n')).await.unwrap();
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.current_step(), Step::StudentData);
            assert!(!app.state.wizard.state().dialog_open);
        }

        #[tokio::test]
        async fn test_typing_while_dialog_open_goes_to_dialog() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            app.handle_key(ctrl('n')).await.unwrap();
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert!(!app.state.wizard.state().dialog_open);
            assert_eq!(app.state.wizard.form().full_name, "");
        }

        #[tokio::test]
        async fn test_submit_before_last_step_is_explained() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            app.handle_key(ctrl('s')).await.unwrap();
            assert!(!app.state.wizard.state().dialog_open);
            assert!(app.state.status_message.is_some());
        }

        #[tokio::test]
        async fn test_strict_policy_focuses_first_error() {
            let wizard = EnrollmentWizard::new(ValidationPolicy::Strict, DEFAULT_DISMISS_DELAY);
            let mut app = build(
                MockAuthPort::new(),
                MockEnrollmentSubmitter::new(),
                AppState::new(wizard),
            );
            app.navigate(View::Enrollment);
            type_text(&mut app, "Budi").await;
            app.handle_key(ctrl('n')).await.unwrap();

            assert!(!app.state.wizard.state().dialog_open);
            assert_eq!(app.state.active_field_key(), Some(FieldKey::Nik));
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("6 data perlu diperbaiki")
            );
        }
    }

    mod documents {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_missing_file_is_reported_and_not_stored() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            advance_to(&mut app, Step::Documents).await;
            type_text(&mut app, "/tidak/ada.pdf").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.has_errors());
            assert!(app.state.wizard.form().birth_certificate.is_none());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_attach_and_detach_file() {
            let path = std::env::temp_dir().join(format!("akta-{}.pdf", uuid::Uuid::new_v4()));
            std::fs::write(&path, b"%PDF").unwrap();

            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            advance_to(&mut app, Step::Documents).await;
            type_text(&mut app, &path.display().to_string()).await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let attached = app.state.wizard.form().birth_certificate.clone().unwrap();
            assert_eq!(attached.size, 4);
            assert!(app.state.file_input.is_empty());

            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert!(app.state.wizard.form().birth_certificate.is_none());
            std::fs::remove_file(path).unwrap();
        }

        #[tokio::test]
        async fn test_consent_toggles() {
            let mut app = enrollment_app(MockEnrollmentSubmitter::new());
            advance_to(&mut app, Step::Documents).await;
            app.state.focus_field(FieldKey::Consent);
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(app.state.wizard.form().consent);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_shows_toast_and_auto_hides() {
            let mut submitter = MockEnrollmentSubmitter::new();
            submitter
                .expect_submit()
                .withf(|payload| payload.nama == "Budi")
                .times(1)
                .returning(|_| Ok(SubmissionReceipt::new()));

            let mut app = enrollment_app(submitter);
            type_text(&mut app, "Budi").await;
            advance_to(&mut app, Step::Documents).await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
            assert!(app.process_submission().await);

            assert!(app.state.wizard.state().success_visible);
            assert!(!app.state.wizard.state().dialog_open);
            assert_eq!(app.state.wizard.form().full_name, "Budi");

            app.tick(Instant::now() + Duration::from_secs(6));
            assert!(!app.state.wizard.state().success_visible);
        }

        #[tokio::test]
        async fn test_loading_dialog_is_shown_before_sending() {
            let mut submitter = MockEnrollmentSubmitter::new();
            submitter
                .expect_submit()
                .times(1)
                .returning(|_| Ok(SubmissionReceipt::new()));

            let mut app = enrollment_app(submitter);
            advance_to(&mut app, Step::Documents).await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.wizard.phase(), WizardPhase::Submitting);
            assert!(app.state.wizard.dialog().unwrap().is_loading());

            assert!(app.process_submission().await);
            assert!(app.state.wizard.state().success_visible);
            assert!(!app.process_submission().await);
        }

        #[tokio::test]
        async fn test_default_submitter_accepts_wizard_payload() {
            let mut app = App::with_ports(
                AppState::default(),
                Box::new(MockAuthPort::new()),
                Box::new(LoggingSubmitter::default()),
                RoleMenuConfig::default(),
                None,
            );
            app.navigate(View::Enrollment);
            advance_to(&mut app, Step::Documents).await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.process_submission().await;

            assert!(app.state.wizard.state().success_visible);
            assert!(app.state.wizard.failure().is_none());
        }

        #[tokio::test]
        async fn test_esc_dismisses_toast_before_leaving() {
            let mut submitter = MockEnrollmentSubmitter::new();
            submitter
                .expect_submit()
                .returning(|_| Ok(SubmissionReceipt::new()));

            let mut app = enrollment_app(submitter);
            advance_to(&mut app, Step::Documents).await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.process_submission().await;

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.wizard.state().success_visible);
            assert_eq!(app.state.current_view, View::Enrollment);
        }

        #[tokio::test]
        async fn test_failure_is_shown_and_retry_possible() {
            let mut submitter = MockEnrollmentSubmitter::new();
            let mut calls = 0;
            submitter.expect_submit().times(2).returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(SubmissionError::Unavailable("timeout".to_string()))
                } else {
                    Ok(SubmissionReceipt::new())
                }
            });

            let mut app = enrollment_app(submitter);
            advance_to(&mut app, Step::Documents).await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.process_submission().await;
            assert!(app.state.wizard.failure().is_some());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.wizard.failure().is_none());
            assert_eq!(app.state.current_view, View::Enrollment);

            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.process_submission().await;
            assert!(app.state.wizard.state().success_visible);
        }
    }

    mod staff {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_sign_in_opens_dashboard() {
            let mut auth = MockAuthPort::new();
            auth.expect_authenticate()
                .withf(|c| c.email == "budi@smanusantara.sch.id" && c.role == Role::Guru)
                .times(1)
                .returning(|_| Ok(guru_session()));

            let mut app = build(auth, MockEnrollmentSubmitter::new(), AppState::default());
            app.handle_key(key(KeyCode::Char('l'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);

            type_text(&mut app, "budi@smanusantara.sch.id").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "guru123").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Dashboard);
            assert_eq!(app.permitted_routes().len(), 6);
            assert_eq!(app.state.login_form.password.as_text(), "");
        }

        #[tokio::test]
        async fn test_rejected_sign_in_stays_on_login() {
            let mut auth = MockAuthPort::new();
            auth.expect_authenticate()
                .returning(|_| Err(AuthError::InvalidCredentials));

            let mut app = build(auth, MockEnrollmentSubmitter::new(), AppState::default());
            app.handle_key(key(KeyCode::Char('l'))).await.unwrap();
            // Focus wraps from the email field to the button
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Login);
            assert_eq!(app.state.current_error(), Some("Email atau password salah"));
            assert!(app.state.session.is_none());
        }

        #[tokio::test]
        async fn test_role_without_dashboard_route_is_refused() {
            let mut auth = MockAuthPort::new();
            auth.expect_authenticate()
                .returning(|_| Ok(guru_session()));
            let overrides: RoleMenuConfig =
                serde_json::from_str(r#"{"guru": ["/dashboard/absensi"]}"#).unwrap();

            let mut app = App::with_ports(
                AppState::default(),
                Box::new(auth),
                Box::new(MockEnrollmentSubmitter::new()),
                RoleMenuConfig::default().merge(overrides),
                None,
            );
            app.navigate(View::Login);
            // Focus wraps from the email field to the button
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Login);
            assert!(app.state.session.is_none());
            assert_eq!(
                app.state.current_error(),
                Some("Peran Guru tidak memiliki akses ke dashboard")
            );
        }

        #[tokio::test]
        async fn test_dashboard_menu_and_sign_out() {
            let mut app = build(
                MockAuthPort::new(),
                MockEnrollmentSubmitter::new(),
                AppState::default(),
            );
            app.state.session = Some(guru_session());
            app.navigate(View::Dashboard);

            for _ in 0..10 {
                app.handle_key(key(KeyCode::Down)).await.unwrap();
            }
            assert_eq!(app.state.dashboard_index, 5);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Modul Pengumuman belum tersedia")
            );

            app.handle_key(key(KeyCode::Char('o'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
            assert!(app.state.session.is_none());
            assert!(app.permitted_routes().is_empty());
        }
    }

    #[tokio::test]
    async fn test_error_dialog_is_modal() {
        let mut app = enrollment_app(MockEnrollmentSubmitter::new());
        app.push_error("gagal");
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(app.state.wizard.form().full_name, "");
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.has_errors());
        assert_eq!(app.state.current_view, View::Enrollment);
    }
}
