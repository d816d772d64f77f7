//! Claim Workflow
//!
//! Per-tile claim form state and the request shapes posted to the server.

use std::collections::HashSet;

use crate::validation::ClaimDetails;

/// State of one tile's inline claim form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimFormState {
    Idle,
    FormOpen,
}

/// Claim form state for every tile, keyed by credit code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimForms {
    open: HashSet<String>,
}

impl ClaimForms {
    pub fn state(&self, code: &str) -> ClaimFormState {
        if self.open.contains(code) {
            ClaimFormState::FormOpen
        } else {
            ClaimFormState::Idle
        }
    }

    /// Idle -> FormOpen. Returns false when already open.
    pub fn show(&mut self, code: &str) -> bool {
        self.open.insert(code.to_string())
    }

    /// FormOpen -> Idle. Returns false when already idle.
    pub fn hide(&mut self, code: &str) -> bool {
        self.open.remove(code)
    }
}

/// A synthesized form submission (always POST, full page navigation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPost {
    pub action: String,
    pub fields: Vec<(&'static str, String)>,
}

impl FormPost {
    pub const METHOD: &'static str = "POST";

    pub fn claim(endpoint: &str, code: &str, details: Option<&ClaimDetails>) -> Self {
        let mut fields = vec![("code", code.to_string())];
        if let Some(details) = details {
            fields.push(("customer_name", details.customer_name.clone()));
            fields.push(("customer_phone", details.customer_phone.clone()));
        }
        Self {
            action: endpoint.to_string(),
            fields,
        }
    }

    pub fn unclaim(endpoint: &str, code: &str) -> Self {
        Self {
            action: endpoint.to_string(),
            fields: vec![("code", code.to_string())],
        }
    }
}
