//! Form domain layer
//!
//! Typed fields, the application record, the static stage layout and the
//! wizard controller that drives them.

mod field;
mod form_data;
mod stage;
mod wizard;

pub use field::{Accommodation, Field, FieldKind};
pub use form_data::{summary_lines, summary_text, FormData};
pub use stage::STAGES;
pub use wizard::{Form, NavButton, Transition, Wizard};
