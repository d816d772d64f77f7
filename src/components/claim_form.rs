//! Claim Form Component
//!
//! Inline customer name/phone form mounted inside a credit tile.

use leptos::logging::error;
use leptos::prelude::*;

use crate::controller::CreditTileController;
use crate::error::{ClaimField, SubmitError};
use crate::validation::ClaimDetails;

/// Inline claim form for one tile
///
/// Validation errors are shown under the fields and focus moves to the
/// offending input. Cancel hands control back to the controller, which
/// unmounts the form and restores the tile footer.
#[component]
pub fn ClaimForm(controller: CreditTileController, code: String) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (error_message, set_error_message) = signal(None::<String>);

    let name_ref = NodeRef::<leptos::html::Input>::new();
    let phone_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the first field once it is in the DOM
    Effect::new(move |_| {
        if let Some(input) = name_ref.get() {
            let _ = input.focus();
        }
    });

    let submit_code = code.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let details = ClaimDetails::new(name.get_untracked(), phone.get_untracked());

        match controller.submit_claim(&submit_code, Some(details)) {
            Ok(()) => set_error_message.set(None),
            Err(SubmitError::Invalid(invalid)) => {
                set_error_message.set(Some(invalid.to_string()));
                let field = match invalid.field() {
                    ClaimField::CustomerName => name_ref,
                    ClaimField::CustomerPhone => phone_ref,
                };
                if let Some(input) = field.get_untracked() {
                    let _ = input.focus();
                }
            }
            Err(SubmitError::Page(e)) => {
                error!("[CLAIM] could not submit claim for {}: {}", submit_code, e);
                set_error_message
                    .set(Some("Could not submit the claim, please try again".to_string()));
            }
        }
    };

    let cancel_code = code.clone();

    view! {
        <form class="claim-form" data-code=code on:submit=on_submit>
            <input
                type="text"
                class="claim-input"
                name="customer_name"
                placeholder="Customer name"
                autocomplete="off"
                node_ref=name_ref
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="tel"
                class="claim-input"
                name="customer_phone"
                placeholder="Phone number"
                autocomplete="off"
                node_ref=phone_ref
                prop:value=move || phone.get()
                on:input=move |ev| set_phone.set(event_target_value(&ev))
            />
            {move || error_message.get().map(|message| view! {
                <p class="claim-error" role="alert">{message}</p>
            })}
            <div class="claim-form-actions">
                <button type="submit" class="btn-confirm-claim">"Claim"</button>
                <button
                    type="button"
                    class="btn-cancel-claim"
                    on:click=move |_| controller.hide_claim_form(&cancel_code)
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
