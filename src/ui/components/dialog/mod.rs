//! Dialog components for TUI

mod base;
mod error_dialog;
mod quit_dialog;

pub use error_dialog::render_error_dialog;
pub use quit_dialog::render_quit_dialog;
