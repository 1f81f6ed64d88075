//! Field validation for contact candidates
//!
//! The same rules run before every create and every update; the HTTP
//! client mirrors them for responsiveness but this check is the
//! enforcement boundary. All rules are evaluated and every failure is
//! collected, not just the first.

use regex::Regex;
use serde::Serialize;

use crate::error::ContactError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const MIN_PHONE_DIGITS: usize = 10;

/// A single failed field rule
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Outcome of validating a candidate record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Convert into a `Result`, turning failures into `InvalidInput`
    pub fn into_result(self) -> crate::Result<()> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(errors) => Err(ContactError::InvalidInput(errors)),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Validate a candidate contact against the field rules.
///
/// Pure and deterministic; safe to call repeatedly.
pub fn validate(candidate: &super::ContactDraft) -> ValidationResult {
    let mut errors = Vec::new();

    if candidate.first_name.trim().is_empty() {
        errors.push(FieldError::new("firstName", "First name is required"));
    }

    if candidate.last_name.trim().is_empty() {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }

    if candidate.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(&candidate.email) {
        errors.push(FieldError::new("email", "Please enter a valid email address"));
    }

    if candidate.phone_number.is_empty() {
        errors.push(FieldError::new("phoneNumber", "Phone number is required"));
    } else if digit_count(&candidate.phone_number) < MIN_PHONE_DIGITS {
        errors.push(FieldError::new(
            "phoneNumber",
            "Please enter a valid phone number (minimum 10 digits)",
        ));
    }

    // company and jobTitle are unconstrained

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    re.is_match(email)
}

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}
