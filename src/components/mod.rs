//! UI Components
//!
//! Leptos views mounted into the server-rendered page.

mod claim_form;
mod item_tags;

pub use claim_form::ClaimForm;
pub use item_tags::ItemTags;
