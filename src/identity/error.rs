//! Errors reported by the identity service

use crate::state::FieldName;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[allow(dead_code)] // UnknownAccount, Unavailable and Rejected come from remote backends
pub enum IdentityError {
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("No account matches these credentials")]
    UnknownAccount,
    #[error("Identity service unavailable: {0}")]
    Unavailable(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl IdentityError {
    /// Field the error belongs to, or None for a form-level failure
    pub fn field(&self) -> Option<FieldName> {
        match self {
            IdentityError::EmailTaken => Some(FieldName::Email),
            IdentityError::UnknownAccount
            | IdentityError::Unavailable(_)
            | IdentityError::Rejected(_) => None,
        }
    }
}
