//! Field and stage validation
//!
//! Everything in here is pure: validators look only at their arguments, and
//! the stage validator takes "today" from a `Clock` so it can be tested.

mod clock;
mod error;
mod stage;
mod validators;

pub use clock::{Clock, SystemClock};
pub use error::{FieldError, FormErrors};
pub use stage::validate_stage;

#[cfg(test)]
pub use clock::MockClock;
