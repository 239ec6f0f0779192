//! Form domain layer
//!
//! Field identity, the registration form record, and the pure validation
//! that derives the error map from it.

mod field;
mod form_state;
mod validation;

pub use field::{FieldId, COURSE_OPTIONS, LEVEL_OPTIONS};
pub use form_state::{RegistrationForm, BUTTONS_ROW_INDEX, BUTTON_COUNT};
pub use validation::{is_valid, validate, ErrorMap};
