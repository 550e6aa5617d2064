//! Application state and core logic

use crate::config::HostConfig;
use crate::identity::IdentityService;
use crate::state::{AppState, FieldName, Focus, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub const REGISTER_SUCCESS_MESSAGE: &str =
    "Account created successfully! You can now manage your cemetery services.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend receiving validated submissions
    identity: Box<dyn IdentityService>,
    /// Host configuration
    pub config: HostConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: HostConfig, identity: Box<dyn IdentityService>) -> Self {
        let mut app = Self {
            state: AppState::new(config.start_view()),
            identity,
            config,
            quit: false,
        };
        app.prefill();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the registration success banner is showing
    pub fn success_banner(&self) -> Option<&'static str> {
        if self.state.current_view == View::Register && self.state.session.is_submitted() {
            Some(REGISTER_SUCCESS_MESSAGE)
        } else {
            None
        }
    }

    /// Time-based updates, called once per frame
    pub fn tick(&mut self) {
        if let Some(since) = self.state.success_since {
            if since.elapsed() >= self.config.success_dismiss() {
                self.dismiss_success();
            }
        }
    }

    fn dismiss_success(&mut self) {
        self.state.success_since = None;
        self.state.session.reset_submission();
    }

    /// Navigate to a screen, starting a fresh form
    pub fn navigate(&mut self, view: View) {
        self.state.navigate(view);
        self.prefill();
    }

    fn prefill(&mut self) {
        if self.state.current_view != View::Login {
            return;
        }
        if let Some(email) = self.config.prefill_email().map(str::to_string) {
            if let Err(err) = self.state.session.set_value(FieldName::Email, email) {
                tracing::warn!(error = %err, "could not prefill email");
            }
        }
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog swallows input until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await,
            View::Register => self.handle_register_key(key).await,
            View::PasswordReset => self.handle_reset_key(key).await,
        }
    }

    /// Handle keys in Login view
    async fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => self.navigate(View::Register),
            KeyCode::Char('f') if ctrl => self.navigate(View::PasswordReset),
            // Signed in: Esc signs out by starting over
            KeyCode::Esc if self.state.session.is_submitted() => self.navigate(View::Login),
            _ if self.state.session.is_submitted() => {}
            _ => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys in Register view
    async fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc if self.success_banner().is_some() => self.dismiss_success(),
            KeyCode::Esc => self.navigate(View::Login),
            _ => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys in Password Reset view
    async fn handle_reset_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.navigate(View::Login),
            // The acknowledgment stays until the user navigates away
            _ if self.state.session.is_submitted() => {}
            _ => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    /// Keys shared by every form
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let focus = self.state.focus();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await?;
            }
            KeyCode::Enter => self.submit().await?,
            KeyCode::F(2) => self.state.toggle_visibility(),
            KeyCode::Char(' ') if focus == Focus::Terms => self.state.toggle_terms(),
            KeyCode::Left => self.state.cycle_relationship(false),
            KeyCode::Right => self.state.cycle_relationship(true),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit the form on screen
    pub async fn submit(&mut self) -> Result<()> {
        let outcome = self.state.session.submit(self.identity.as_mut()).await;
        tracing::debug!(view = ?self.state.current_view, ?outcome, "submit finished");

        match outcome {
            SubmitOutcome::Accepted => self.on_accepted(),
            SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => {
                self.state.status_message = None;
            }
            SubmitOutcome::AlreadySubmitted => {}
        }
        Ok(())
    }

    fn on_accepted(&mut self) {
        let email = self.state.session.value(FieldName::Email).to_string();
        match self.state.current_view {
            View::Login => {
                self.state.status_message = Some(format!("Signed in as {email}"));
                self.remember_email(email);
            }
            View::Register => {
                self.state.success_since = Some(Instant::now());
            }
            View::PasswordReset => {
                self.state.status_message = Some(format!("Reset instructions sent to {email}"));
            }
        }
    }

    fn remember_email(&mut self, email: String) {
        if !self.config.remembers_email() || self.config.last_email.as_deref() == Some(&email) {
            return;
        }
        self.config.last_email = Some(email);
        if let Err(err) = self.config.save() {
            self.push_error(format!("Failed to save settings: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{IdentityError, LocalIdentityService, MockIdentityService};
    use crate::state::{FormKind, SubmissionState};
    use crossterm::event::KeyEventState;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(c))
        }
    }

    fn app_on(view: View, identity: Box<dyn IdentityService>) -> App {
        let mut app = App::new(HostConfig::default(), identity);
        app.navigate(view);
        app
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn fill_register(app: &mut App) {
        type_text(app, "Ada Lovelace").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(app, "ada@example.com").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(app, "555.123.4567").await;
        app.state.active_form_field = 10;
        type_text(app, "longenough1").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(app, "longenough1").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert_eq!(app.state.focus(), Focus::Terms);
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_login_shortcuts_switch_screens() {
            let mut app = app_on(View::Login, Box::new(MockIdentityService::new()));
            app.handle_key(ctrl('r')).await.unwrap();
            assert_eq!(app.state.current_view, View::Register);
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);
            app.handle_key(ctrl('f')).await.unwrap();
            assert_eq!(app.state.current_view, View::PasswordReset);
            assert_eq!(app.state.session.kind(), FormKind::PasswordReset);
        }

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = app_on(View::Register, Box::new(MockIdentityService::new()));
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_error_dialog_swallows_keys() {
            let mut app = app_on(View::Login, Box::new(MockIdentityService::new()));
            app.push_error("boom");
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            assert_eq!(app.state.session.value(FieldName::Email), "");
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.current_error().is_none());
        }
    }

    mod register_screen {
        use super::*;

        #[tokio::test]
        async fn test_submit_without_terms_shows_terms_error() {
            let mut identity = MockIdentityService::new();
            identity.expect_register().never();
            let mut app = app_on(View::Register, Box::new(identity));
            fill_register(&mut app).await;

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.session.errors().fields_clear());
            assert!(app.state.session.errors().terms().is_some());
            assert!(app.success_banner().is_none());
        }

        #[tokio::test]
        async fn test_success_banner_and_dismiss() {
            let mut app = app_on(View::Register, Box::new(LocalIdentityService::new()));
            fill_register(&mut app).await;
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(app.state.session.flags().terms_accepted);

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.success_banner(), Some(REGISTER_SUCCESS_MESSAGE));

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.success_banner().is_none());
            assert_eq!(app.state.current_view, View::Register);
            assert_eq!(
                app.state.session.submission_state(),
                SubmissionState::Idle
            );
        }

        #[tokio::test]
        async fn test_banner_auto_dismisses() {
            let mut app = app_on(View::Register, Box::new(LocalIdentityService::new()));
            app.config.success_dismiss_secs = Some(0);
            fill_register(&mut app).await;
            app.state.toggle_terms();
            app.submit().await.unwrap();
            assert!(app.success_banner().is_some());

            app.tick();
            assert!(app.success_banner().is_none());
        }

        #[tokio::test]
        async fn test_banner_stays_before_timeout() {
            let mut app = app_on(View::Register, Box::new(LocalIdentityService::new()));
            app.config.success_dismiss_secs = Some(60);
            fill_register(&mut app).await;
            app.state.toggle_terms();
            app.submit().await.unwrap();
            app.tick();
            assert!(app.success_banner().is_some());
            assert!(app.state.success_since.unwrap().elapsed() < Duration::from_secs(60));
        }

        #[tokio::test]
        async fn test_duplicate_registration_marks_email() {
            let mut app = app_on(View::Register, Box::new(LocalIdentityService::new()));
            fill_register(&mut app).await;
            app.state.toggle_terms();
            app.submit().await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();

            app.submit().await.unwrap();
            assert_eq!(
                app.state.session.errors().field(FieldName::Email),
                Some(IdentityError::EmailTaken.to_string().as_str())
            );
        }
    }

    mod login_screen {
        use super::*;

        #[tokio::test]
        async fn test_sign_in_sets_status() {
            let mut identity = MockIdentityService::new();
            identity.expect_sign_in().times(1).returning(|_| Ok(()));
            let mut app = app_on(View::Login, Box::new(identity));

            type_text(&mut app, "bob@example.com").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "secret").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Signed in as bob@example.com")
            );
            // Further typing is ignored while signed in
            type_text(&mut app, "x").await;
            assert_eq!(app.state.session.value(FieldName::Password), "secret");
        }

        #[tokio::test]
        async fn test_invalid_login_never_calls_service() {
            let mut identity = MockIdentityService::new();
            identity.expect_sign_in().never();
            let mut app = app_on(View::Login, Box::new(identity));
            type_text(&mut app, "bob").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(
                app.state.session.errors().field(FieldName::Email),
                Some("Please enter a valid email address")
            );
        }
    }

    mod reset_screen {
        use super::*;

        #[tokio::test]
        async fn test_acknowledgment_ignores_edits() {
            let mut identity = MockIdentityService::new();
            identity
                .expect_request_password_reset()
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_on(View::PasswordReset, Box::new(identity));
            type_text(&mut app, "bob@example.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.session.is_submitted());

            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.session.is_submitted());
            assert_eq!(app.state.session.value(FieldName::Email), "bob@example.com");

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);
        }
    }
}
