//! Application state definitions

use super::forms::{FieldName, FlagName, FormKind, FormSession, RELATIONSHIP_OPTIONS};
use std::collections::VecDeque;
use std::time::Instant;

/// Current screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    PasswordReset,
}

impl View {
    pub fn form_kind(&self) -> FormKind {
        match self {
            View::Login => FormKind::Login,
            View::Register => FormKind::Register,
            View::PasswordReset => FormKind::PasswordReset,
        }
    }

    /// Parse a screen name as used in config and the environment
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "login" | "signin" | "sign-in" => Some(View::Login),
            "register" | "signup" | "sign-up" => Some(View::Register),
            "reset" | "reset-password" | "password-reset" => Some(View::PasswordReset),
            _ => None,
        }
    }
}

/// Something on a form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Terms,
    Submit,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    /// Session for the form on screen; replaced on every navigation
    pub session: FormSession,
    pub active_form_field: usize,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// When the registration success banner appeared
    pub success_since: Option<Instant>,
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(View::default())
    }
}

impl AppState {
    pub fn new(view: View) -> Self {
        Self {
            current_view: view,
            session: FormSession::new(view.form_kind()),
            active_form_field: 0,
            status_message: None,
            success_since: None,
            error_queue: VecDeque::new(),
        }
    }

    /// Switch screens. The previous form session is discarded.
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = ?self.current_view, to = ?view, "navigate");
        self.current_view = view;
        self.session = FormSession::new(view.form_kind());
        self.active_form_field = 0;
        self.success_since = None;
        self.status_message = None;
    }

    /// Focus targets in tab order
    pub fn focus_targets(&self) -> Vec<Focus> {
        let kind = self.session.kind();
        let mut targets: Vec<Focus> = kind.fields().iter().map(|f| Focus::Field(*f)).collect();
        if kind.rules().requires_terms {
            targets.push(Focus::Terms);
        }
        targets.push(Focus::Submit);
        targets
    }

    pub fn focus(&self) -> Focus {
        let targets = self.focus_targets();
        targets
            .get(self.active_form_field)
            .copied()
            .unwrap_or(Focus::Submit)
    }

    pub fn is_focused(&self, target: Focus) -> bool {
        self.focus() == target
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn form_field_count(&self) -> usize {
        self.focus_targets().len()
    }

    /// Type a character into the focused text field
    pub fn form_input_char(&mut self, c: char) {
        if let Focus::Field(field) = self.focus() {
            if field == FieldName::Relationship {
                return;
            }
            let mut value = self.session.value(field).to_string();
            value.push(c);
            self.set_field(field, value);
        }
    }

    /// Delete the last character of the focused text field
    pub fn form_backspace(&mut self) {
        if let Focus::Field(field) = self.focus() {
            let mut value = self.session.value(field).to_string();
            if field == FieldName::Relationship {
                value.clear();
            } else if value.pop().is_none() {
                return;
            }
            self.set_field(field, value);
        }
    }

    /// Step through relationship options when that field is focused
    pub fn cycle_relationship(&mut self, forward: bool) {
        if self.focus() != Focus::Field(FieldName::Relationship) {
            return;
        }
        let current = self.session.value(FieldName::Relationship);
        let count = RELATIONSHIP_OPTIONS.len();
        let position = RELATIONSHIP_OPTIONS.iter().position(|o| *o == current);
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.set_field(FieldName::Relationship, RELATIONSHIP_OPTIONS[next].to_string());
    }

    pub fn toggle_terms(&mut self) {
        self.session.toggle_flag(FlagName::TermsAccepted);
    }

    /// Show or hide the focused password field
    pub fn toggle_visibility(&mut self) {
        match self.focus() {
            Focus::Field(FieldName::Password) => self.session.toggle_flag(FlagName::ShowPassword),
            Focus::Field(FieldName::ConfirmPassword) => {
                self.session.toggle_flag(FlagName::ShowConfirmPassword)
            }
            _ => {}
        }
    }

    fn set_field(&mut self, field: FieldName, value: String) {
        if let Err(err) = self.session.set_value(field, value) {
            tracing::warn!(error = %err, "ignored field change");
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "error queued");
        self.error_queue.push_back(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
