//! Pending Items
//!
//! Tag-style item list composed before submitting the create-credit form.

use serde::Serialize;

use crate::error::ItemError;

/// Serializes as a plain JSON array of strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PendingItems(Vec<String>);

impl PendingItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and append. Empty text and exact duplicates are rejected.
    pub fn add(&mut self, raw: &str) -> Result<(), ItemError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ItemError::Empty);
        }
        if self.0.iter().any(|existing| existing == value) {
            return Err(ItemError::Duplicate(value.to_string()));
        }
        self.0.push(value.to_string());
        Ok(())
    }

    /// Remove by position; out of range is a no-op
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the hidden `items` field
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Guard for the create-credit form
    pub fn ensure_submittable(&self) -> Result<(), ItemError> {
        if self.is_empty() {
            Err(ItemError::NoItems)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims() {
        let mut items = PendingItems::new();
        items.add("  Coffee  ").unwrap();
        assert_eq!(items.as_slice(), ["Coffee".to_string()]);
    }

    #[test]
    fn test_add_rejects_empty_and_duplicates() {
        let mut items = PendingItems::new();
        assert_eq!(items.add("   "), Err(ItemError::Empty));

        items.add("Tea").unwrap();
        assert_eq!(items.add(" Tea"), Err(ItemError::Duplicate("Tea".to_string())));
        // Case-sensitive: a different case is a different item
        items.add("tea").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut items = PendingItems::new();
        items.add("A").unwrap();
        items.add("B").unwrap();
        items.add("C").unwrap();

        assert_eq!(items.remove(1), Some("B".to_string()));
        assert_eq!(items.len(), 2);
        assert_eq!(items.as_slice(), ["A".to_string(), "C".to_string()]);

        assert_eq!(items.remove(5), None);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_json_serialization() {
        let mut items = PendingItems::new();
        assert_eq!(items.to_json().unwrap(), "[]");
        items.add("Item 1").unwrap();
        items.add("Say \"hi\"").unwrap();
        assert_eq!(items.to_json().unwrap(), r#"["Item 1","Say \"hi\""]"#);
    }

    #[test]
    fn test_empty_list_blocks_submission() {
        let mut items = PendingItems::new();
        assert_eq!(items.ensure_submittable(), Err(ItemError::NoItems));
        items.add("X").unwrap();
        assert_eq!(items.ensure_submittable(), Ok(()));
    }
}
