//! Trait abstraction for the identity service to enable mocking in tests

use super::IdentityError;
use crate::state::FieldValues;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account created by a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub account_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Backend the auth forms hand validated submissions to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Sign in with the email and password fields
    async fn sign_in(&mut self, values: &FieldValues) -> Result<(), IdentityError>;

    /// Create an account from the registration fields
    async fn register(&mut self, values: &FieldValues) -> Result<Registration, IdentityError>;

    /// Send password reset instructions to an address
    async fn request_password_reset(&mut self, email: &str) -> Result<(), IdentityError>;
}
