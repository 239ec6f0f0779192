//! Pure validation of the registration form
//!
//! Invalid input is ordinary, user-correctable state: violations come back
//! as `ErrorMap` entries, never as errors. The map is re-derived from the
//! form on every call and holds no state of its own.

use super::field::FieldId;
use super::form_state::RegistrationForm;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field -> violation message. An absent key means the field is valid.
pub type ErrorMap = BTreeMap<FieldId, &'static str>;

/// Shape check for `local@domain.tld`: non-whitespace, non-@ runs around a
/// single `@`, with a dot inside the domain part.
fn email_shape_ok(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
        .is_match(email)
}

/// Derive the error map for the current form values.
///
/// The message rule deliberately has no separate "required" message: it
/// reports the length violation even on an empty value.
pub fn validate(form: &RegistrationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.name.trim().is_empty() {
        errors.insert(FieldId::Name, "Name is required.");
    } else if form.name.trim().chars().count() < 3 {
        errors.insert(FieldId::Name, "Name must be at least 3 characters.");
    }

    if form.email.trim().is_empty() {
        errors.insert(FieldId::Email, "Email is required.");
    } else if !email_shape_ok(&form.email) {
        errors.insert(FieldId::Email, "Please enter a valid email address.");
    }

    if form.course.trim().is_empty() {
        errors.insert(FieldId::Course, "Please choose a course.");
    }

    if form.level.trim().is_empty() {
        errors.insert(FieldId::Level, "Select your experience level.");
    }

    if form.message.trim().chars().count() < 10 {
        errors.insert(FieldId::Message, "Message must be at least 10 characters.");
    }

    errors
}

/// True iff the error map for `form` is empty
pub fn is_valid(form: &RegistrationForm) -> bool {
    validate(form).is_empty()
}
