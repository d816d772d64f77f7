//! Page Configuration
//!
//! Read from data attributes on the `.credits-grid` container.

pub const DEFAULT_CLAIM_URL: &str = "/claim-credit";
pub const DEFAULT_UNCLAIM_URL: &str = "/unclaim-credit";

/// Which claim workflow the page uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimMode {
    /// Post the code as soon as the claim button is clicked
    Direct,
    /// Collect and validate customer name + phone first
    #[default]
    Customer,
}

impl ClaimMode {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "direct" => ClaimMode::Direct,
            _ => ClaimMode::Customer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub claim_url: String,
    pub unclaim_url: String,
    pub claim_mode: ClaimMode,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            claim_url: DEFAULT_CLAIM_URL.to_string(),
            unclaim_url: DEFAULT_UNCLAIM_URL.to_string(),
            claim_mode: ClaimMode::default(),
        }
    }
}

impl PageConfig {
    /// Build from an attribute getter; empty attributes count as absent
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            attr(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Self {
            claim_url: non_empty("data-claim-url").unwrap_or(defaults.claim_url),
            unclaim_url: non_empty("data-unclaim-url").unwrap_or(defaults.unclaim_url),
            claim_mode: non_empty("data-claim-mode")
                .map(|mode| ClaimMode::parse(&mode))
                .unwrap_or(defaults.claim_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let config = PageConfig::from_attributes(|_| None);
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.claim_url, "/claim-credit");
        assert_eq!(config.unclaim_url, "/unclaim-credit");
        assert_eq!(config.claim_mode, ClaimMode::Customer);
    }

    #[test]
    fn test_attributes_override() {
        let config = PageConfig::from_attributes(|name| match name {
            "data-claim-url" => Some("/store/7/claim".to_string()),
            "data-unclaim-url" => Some("".to_string()),
            "data-claim-mode" => Some("direct".to_string()),
            _ => None,
        });
        assert_eq!(config.claim_url, "/store/7/claim");
        assert_eq!(config.unclaim_url, DEFAULT_UNCLAIM_URL);
        assert_eq!(config.claim_mode, ClaimMode::Direct);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_customer() {
        assert_eq!(ClaimMode::parse("bogus"), ClaimMode::Customer);
    }
}
