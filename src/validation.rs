//! Claim Validation
//!
//! Superficial customer name/phone checks before a claim is posted.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ValidationError;

pub const MIN_NAME_CHARS: usize = 2;
/// Shortest accepted local number, e.g. `555-123`
pub const MIN_PHONE_DIGITS: usize = 6;

static PHONE_CHARS: OnceLock<Regex> = OnceLock::new();

fn phone_chars() -> &'static Regex {
    PHONE_CHARS.get_or_init(|| Regex::new(r"^[0-9+\-.() ]+$").expect("phone pattern is valid"))
}

/// Customer details collected by the inline claim form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimDetails {
    pub customer_name: String,
    pub customer_phone: String,
}

impl ClaimDetails {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            customer_name: name.into(),
            customer_phone: phone.into(),
        }
    }
}

/// Returns the trimmed name
pub fn validate_customer_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(name.to_string())
}

/// Returns the trimmed phone exactly as typed (formatting is kept)
pub fn validate_customer_phone(raw: &str) -> Result<String, ValidationError> {
    let phone = raw.trim();
    if phone.is_empty() {
        return Err(ValidationError::PhoneMissing);
    }
    if !phone_chars().is_match(phone) {
        return Err(ValidationError::PhoneInvalid);
    }
    if phone.chars().filter(|c| c.is_ascii_digit()).count() < MIN_PHONE_DIGITS {
        return Err(ValidationError::PhoneTooShort);
    }
    Ok(phone.to_string())
}

/// Validate both fields, name first
pub fn validate_claim(input: &ClaimDetails) -> Result<ClaimDetails, ValidationError> {
    let customer_name = validate_customer_name(&input.customer_name)?;
    let customer_phone = validate_customer_phone(&input.customer_phone)?;
    Ok(ClaimDetails {
        customer_name,
        customer_phone,
    })
}
