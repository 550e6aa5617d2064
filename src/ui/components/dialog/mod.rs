//! Dialog components for TUI

mod base;
mod error_dialog;

pub use base::render_notice;
pub use error_dialog::render_error_dialog;
