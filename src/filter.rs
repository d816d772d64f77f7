//! Tile Filtering
//!
//! Pure visibility computation for search + category filter.

use crate::models::{CreditTile, StatusFilter};
use leptos_swipe::SwipeDirection;

/// Outcome of one filter pass, in tile order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterResult {
    /// Whether the "no results" indicator should be shown
    pub fn show_no_results(&self) -> bool {
        self.visible_count == 0
    }
}

/// Check one tile. `query` must already be trimmed and lowercased.
pub fn tile_matches(tile: &CreditTile, query: &str, status: StatusFilter) -> bool {
    if !status.admits(tile.status) {
        return false;
    }
    query.is_empty()
        || tile
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(query))
}

pub fn filter_tiles<'a>(
    tiles: impl IntoIterator<Item = &'a CreditTile>,
    query: &str,
    status: StatusFilter,
) -> FilterResult {
    let query = query.trim().to_lowercase();
    let visible: Vec<bool> = tiles
        .into_iter()
        .map(|tile| tile_matches(tile, &query, status))
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();
    FilterResult { visible, visible_count }
}

/// Next category for a swipe, clamped at both ends.
///
/// Swiping left advances, swiping right goes back.
pub fn step_filter(current: StatusFilter, direction: SwipeDirection) -> StatusFilter {
    let order = StatusFilter::ORDER;
    let idx = order.iter().position(|f| *f == current).unwrap_or(0);
    let next = match direction {
        SwipeDirection::Left => (idx + 1).min(order.len() - 1),
        SwipeDirection::Right => idx.saturating_sub(1),
    };
    order[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TileStatus;

    fn customer_tile(code: &str, status: TileStatus, name: &str, phone: &str) -> CreditTile {
        let mut tile = CreditTile::new(code, status);
        tile.customer_name = Some(name.to_string());
        tile.customer_phone = Some(phone.to_string());
        tile
    }

    fn tiles() -> Vec<CreditTile> {
        vec![
            customer_tile("ABC", TileStatus::Unclaimed, "Jane Smith", "555-1234"),
            customer_tile("X9Z", TileStatus::Claimed, "Bob Stone", "777-0000"),
            CreditTile::new("A555", TileStatus::Unclaimed),
        ]
    }

    #[test]
    fn test_empty_query_all_shows_everything() {
        let result = filter_tiles(&tiles(), "", StatusFilter::All);
        assert_eq!(result.visible, vec![true, true, true]);
        assert!(!result.show_no_results());
    }

    #[test]
    fn test_phone_match_without_code_match() {
        let result = filter_tiles(&tiles(), "555", StatusFilter::All);
        // ABC matches by phone only, A555 by code
        assert_eq!(result.visible, vec![true, false, true]);
        assert_eq!(result.visible_count, 2);
        assert!(!tiles()[0].code.contains("555"));
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let result = filter_tiles(&tiles(), "  jane ", StatusFilter::All);
        assert_eq!(result.visible, vec![true, false, false]);

        let result = filter_tiles(&tiles(), "x9z", StatusFilter::All);
        assert_eq!(result.visible, vec![false, true, false]);
    }

    #[test]
    fn test_status_filter_combines_with_query() {
        let claimed = StatusFilter::Only(TileStatus::Claimed);
        let result = filter_tiles(&tiles(), "", claimed);
        assert_eq!(result.visible, vec![false, true, false]);

        let result = filter_tiles(&tiles(), "jane", claimed);
        assert_eq!(result.visible, vec![false, false, false]);
        assert!(result.show_no_results());
    }

    #[test]
    fn test_claimed_by_is_searchable() {
        let mut tile = CreditTile::new("K2K", TileStatus::Claimed);
        tile.claimed_by = Some("Front Desk".to_string());
        assert!(tile_matches(&tile, "desk", StatusFilter::All));
    }

    #[test]
    fn test_no_tiles_shows_no_results() {
        let result = filter_tiles(&Vec::<CreditTile>::new(), "", StatusFilter::All);
        assert!(result.show_no_results());
    }

    #[test]
    fn test_step_filter_clamps() {
        let unclaimed = StatusFilter::Only(TileStatus::Unclaimed);
        let claimed = StatusFilter::Only(TileStatus::Claimed);

        assert_eq!(step_filter(StatusFilter::All, SwipeDirection::Left), unclaimed);
        assert_eq!(step_filter(unclaimed, SwipeDirection::Left), claimed);
        assert_eq!(step_filter(claimed, SwipeDirection::Left), claimed);

        assert_eq!(step_filter(claimed, SwipeDirection::Right), unclaimed);
        assert_eq!(step_filter(StatusFilter::All, SwipeDirection::Right), StatusFilter::All);
    }
}
