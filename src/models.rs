//! Frontend Models
//!
//! View-models for the server-rendered credit tiles.

/// Claim status of a credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileStatus {
    #[default]
    Unclaimed,
    Claimed,
}

impl TileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileStatus::Unclaimed => "unclaimed",
            TileStatus::Claimed => "claimed",
        }
    }

    /// Parse a status attribute. The server still emits `active` for unclaimed credits.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "unclaimed" | "active" => Some(TileStatus::Unclaimed),
            "claimed" => Some(TileStatus::Claimed),
            _ => None,
        }
    }
}

/// Category filter shown above the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TileStatus),
}

impl StatusFilter {
    /// Display order of the filter buttons
    pub const ORDER: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Only(TileStatus::Unclaimed),
        StatusFilter::Only(TileStatus::Claimed),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        TileStatus::parse(s).map(StatusFilter::Only)
    }

    pub fn admits(&self, status: TileStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// One credit card in the listing
#[derive(Debug, Clone, PartialEq)]
pub struct CreditTile {
    /// Server-assigned code, unique per tile
    pub code: String,
    pub status: TileStatus,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    /// Who claimed the credit, if anyone
    pub claimed_by: Option<String>,
}

impl CreditTile {
    pub fn new(code: impl Into<String>, status: TileStatus) -> Self {
        Self {
            code: code.into(),
            status,
            customer_name: None,
            customer_phone: None,
            claimed_by: None,
        }
    }

    /// Build a tile from its element's data attributes.
    ///
    /// `attr` receives the attribute name (e.g. `data-code`). Returns None when
    /// the tile has no code.
    pub fn from_data_attributes(attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |name: &str| {
            attr(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let code = non_empty("data-code")?;
        let claimed_by = non_empty("data-claimed-by");
        let status = non_empty("data-status")
            .and_then(|s| TileStatus::parse(&s))
            .unwrap_or(if claimed_by.is_some() {
                TileStatus::Claimed
            } else {
                TileStatus::Unclaimed
            });

        let mut tile = Self::new(code, status);
        tile.customer_name = non_empty("data-customer-name");
        tile.customer_phone = non_empty("data-customer-phone");
        tile.claimed_by = claimed_by;
        Some(tile)
    }

    /// Fields the search box matches against
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.code.as_str())
            .chain(self.customer_name.as_deref())
            .chain(self.customer_phone.as_deref())
            .chain(self.claimed_by.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(TileStatus::parse("claimed"), Some(TileStatus::Claimed));
        assert_eq!(TileStatus::parse("Active"), Some(TileStatus::Unclaimed));
        assert_eq!(TileStatus::parse("expired"), None);
        assert_eq!(StatusFilter::parse("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::parse("unclaimed"),
            Some(StatusFilter::Only(TileStatus::Unclaimed))
        );
    }

    #[test]
    fn test_filter_admits() {
        assert!(StatusFilter::All.admits(TileStatus::Claimed));
        assert!(StatusFilter::Only(TileStatus::Claimed).admits(TileStatus::Claimed));
        assert!(!StatusFilter::Only(TileStatus::Claimed).admits(TileStatus::Unclaimed));
    }

    #[test]
    fn test_tile_from_data_attributes() {
        let tile = CreditTile::from_data_attributes(attrs(&[
            ("data-code", "ABC"),
            ("data-status", "claimed"),
            ("data-customer-name", "Jane Smith"),
            ("data-customer-phone", "555-1234"),
            ("data-claimed-by", ""),
        ]))
        .unwrap();

        assert_eq!(tile.code, "ABC");
        assert_eq!(tile.status, TileStatus::Claimed);
        assert_eq!(tile.customer_name.as_deref(), Some("Jane Smith"));
        assert_eq!(tile.customer_phone.as_deref(), Some("555-1234"));
        assert_eq!(tile.claimed_by, None);
    }

    #[test]
    fn test_tile_status_falls_back_to_claimed_by() {
        let claimed = CreditTile::from_data_attributes(attrs(&[
            ("data-code", "X1Z"),
            ("data-claimed-by", "Bob"),
        ]))
        .unwrap();
        assert_eq!(claimed.status, TileStatus::Claimed);

        let open = CreditTile::from_data_attributes(attrs(&[("data-code", "Q7Q")])).unwrap();
        assert_eq!(open.status, TileStatus::Unclaimed);
    }

    #[test]
    fn test_tile_without_code_is_skipped() {
        assert!(CreditTile::from_data_attributes(attrs(&[("data-code", "  ")])).is_none());
        assert!(CreditTile::from_data_attributes(attrs(&[])).is_none());
    }

    #[test]
    fn test_searchable_fields() {
        let mut tile = CreditTile::new("ABC", TileStatus::Unclaimed);
        tile.customer_name = Some("Jane".to_string());
        tile.customer_phone = Some("555".to_string());
        let fields: Vec<&str> = tile.searchable_fields().collect();
        assert_eq!(fields, vec!["ABC", "Jane", "555"]);
    }
}
