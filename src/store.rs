//! Controller State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::claim::ClaimForms;
use crate::error::ItemError;
use crate::items::PendingItems;
use crate::models::StatusFilter;
use crate::theme::Theme;

/// All client-side state of the credits page
#[derive(Clone, Debug, Default, Store)]
pub struct CreditsState {
    pub theme: Theme,
    /// Search box text, as typed
    pub query: String,
    pub status_filter: StatusFilter,
    /// Items composed for the create-credit form
    pub items: PendingItems,
    pub claim_forms: ClaimForms,
}

impl CreditsState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CreditsStore = Store<CreditsState>;

// ========================
// Store Helper Functions
// ========================

/// Flip the theme and return the new value
pub fn store_toggle_theme(store: &CreditsStore) -> Theme {
    let next = store.theme().get_untracked().toggled();
    store.theme().set(next);
    next
}

/// Add a pending item
pub fn store_add_item(store: &CreditsStore, text: &str) -> Result<(), ItemError> {
    store.items().write().add(text)?;
    log!("[ITEMS] {} pending", store.items().with_untracked(PendingItems::len));
    Ok(())
}

/// Remove a pending item by position (no-op when out of range)
pub fn store_remove_item(store: &CreditsStore, index: usize) {
    let removed = store.items().write().remove(index);
    if removed.is_none() {
        warn!("[ITEMS] remove index {} out of range", index);
    }
}
