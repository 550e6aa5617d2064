//! Identity service seam used when a form submission passes validation

mod error;
mod local;
mod traits;

pub use error::IdentityError;
pub use local::LocalIdentityService;
pub use traits::{IdentityService, Registration};

#[cfg(test)]
pub use traits::MockIdentityService;
