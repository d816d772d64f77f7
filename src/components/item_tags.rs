//! Item Tags Component
//!
//! Pending items of the create-credit form, one removable tag each.

use leptos::prelude::*;

use crate::store::{store_remove_item, CreditsStore, CreditsStateStoreFields};

/// Tag list for the pending items
#[component]
pub fn ItemTags(store: CreditsStore) -> impl IntoView {
    let items = move || store.items().with(|items| items.as_slice().to_vec());

    view! {
        {move || items().into_iter().enumerate().map(|(index, item)| {
            view! {
                <span class="item-tag">
                    {item}
                    " "
                    <button
                        type="button"
                        class="item-tag-remove"
                        on:click=move |_| store_remove_item(&store, index)
                    >
                        "×"
                    </button>
                </span>
            }
        }).collect_view()}
    }
}
