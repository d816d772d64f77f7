//! Error Types
//!
//! Every user-facing error is recovered locally by re-prompting; none are retried.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Pending item list errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item text is empty")]
    Empty,
    #[error("item already added: {0}")]
    Duplicate(String),
    #[error("Please add at least one item")]
    NoItems,
}

/// Which claim field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    CustomerName,
    CustomerPhone,
}

impl ClaimField {
    /// Form field name as posted to the server
    pub fn name(&self) -> &'static str {
        match self {
            ClaimField::CustomerName => "customer_name",
            ClaimField::CustomerPhone => "customer_phone",
        }
    }
}

/// Customer detail validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter the customer name")]
    NameMissing,
    #[error("Customer name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter the customer phone number")]
    PhoneMissing,
    #[error("Please enter a valid phone number")]
    PhoneInvalid,
    #[error("Phone number must contain at least 7 digits")]
    PhoneTooShort,
}

impl ValidationError {
    /// The field that should receive focus
    pub fn field(&self) -> ClaimField {
        match self {
            ValidationError::NameMissing | ValidationError::NameTooShort => {
                ClaimField::CustomerName
            }
            ValidationError::PhoneMissing
            | ValidationError::PhoneInvalid
            | ValidationError::PhoneTooShort => ClaimField::CustomerPhone,
        }
    }
}

/// Browser/DOM failures
#[derive(Debug, Clone, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    Missing(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Why a claim/unclaim submission did not happen
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Why the create-credit form was held back
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateFormError {
    #[error(transparent)]
    Items(#[from] ItemError),
    #[error(transparent)]
    Customer(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::NameTooShort.field(), ClaimField::CustomerName);
        assert_eq!(ValidationError::PhoneInvalid.field(), ClaimField::CustomerPhone);
        assert_eq!(ClaimField::CustomerPhone.name(), "customer_phone");
    }

    #[test]
    fn test_messages() {
        assert!(ValidationError::PhoneInvalid.to_string().contains("valid phone number"));
        assert_eq!(ItemError::NoItems.to_string(), "Please add at least one item");
        let err: SubmitError = ValidationError::NameMissing.into();
        assert_eq!(err.to_string(), "Please enter the customer name");

        let err: CreateFormError = ItemError::NoItems.into();
        assert_eq!(err.to_string(), "Please add at least one item");
    }
}
