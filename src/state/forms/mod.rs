//! Form domain layer
//!
//! Field values, validation rules, error tracking and the submit state
//! machine for the sign-in, registration and password reset forms. Nothing
//! here knows how the forms are drawn.

mod errors;
mod field;
mod rules;
mod session;

pub use field::{FieldName, FieldValues, FlagName, RELATIONSHIP_OPTIONS};
pub use session::{FormKind, FormSession, SubmissionState, SubmitOutcome};
