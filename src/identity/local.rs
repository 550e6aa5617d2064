//! In-process identity service
//!
//! Stands in for a remote backend: every call is logged and registered
//! addresses are remembered for the lifetime of the process so duplicate
//! sign-ups are refused. Passwords are never stored.

use super::{IdentityError, IdentityService, Registration};
use crate::state::{FieldName, FieldValues};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct LocalIdentityService {
    /// Lowercased addresses of accounts created this session
    registered: HashSet<String>,
}

impl LocalIdentityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.registered.contains(&email.to_lowercase())
    }
}

#[async_trait]
impl IdentityService for LocalIdentityService {
    async fn sign_in(&mut self, values: &FieldValues) -> Result<(), IdentityError> {
        tracing::info!(email = values.get(FieldName::Email), "sign-in attempt");
        Ok(())
    }

    async fn register(&mut self, values: &FieldValues) -> Result<Registration, IdentityError> {
        let email = values.get(FieldName::Email).to_string();
        if self.is_registered(&email) {
            tracing::warn!(%email, "registration refused, address already registered");
            return Err(IdentityError::EmailTaken);
        }
        self.registered.insert(email.to_lowercase());

        let registration = Registration {
            account_id: Uuid::new_v4(),
            email,
            created_at: Utc::now(),
        };
        tracing::info!(
            account = %registration.account_id,
            email = %registration.email,
            created = %registration.created_at,
            relationship = values.get(FieldName::Relationship),
            "signup attempt accepted"
        );
        Ok(registration)
    }

    async fn request_password_reset(&mut self, email: &str) -> Result<(), IdentityError> {
        tracing::info!(%email, "password reset requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormKind, FormSession};

    fn signup(email: &str) -> FieldValues {
        let mut session = FormSession::new(FormKind::Register);
        session.set_value(FieldName::Email, email).unwrap();
        session.values().clone()
    }

    #[tokio::test]
    async fn test_register_returns_receipt() {
        let mut service = LocalIdentityService::new();
        let registration = service.register(&signup("ada@example.com")).await.unwrap();
        assert_eq!(registration.email, "ada@example.com");
        assert!(service.is_registered("ada@example.com"));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_refused_case_insensitively() {
        let mut service = LocalIdentityService::new();
        service.register(&signup("ada@example.com")).await.unwrap();
        let err = service
            .register(&signup("Ada@Example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, IdentityError::EmailTaken);
    }

    #[tokio::test]
    async fn test_sign_in_and_reset_succeed() {
        let mut service = LocalIdentityService::new();
        let mut session = FormSession::new(FormKind::Login);
        session.set_value(FieldName::Email, "bob@example.com").unwrap();
        assert!(service.sign_in(session.values()).await.is_ok());
        assert!(service
            .request_password_reset("bob@example.com")
            .await
            .is_ok());
    }

    #[test]
    fn test_new_has_no_accounts() {
        let service = LocalIdentityService::new();
        assert!(!service.is_registered("ada@example.com"));
    }
}
