//! Credits Page App
//!
//! Root component. Renders nothing itself; it runs the controller's binding
//! pass over the server-rendered page inside the Leptos owner.

use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::controller::CreditTileController;

#[component]
pub fn App() -> impl IntoView {
    match CreditTileController::initialize() {
        Ok(controller) => log!("[APP] credits page bound ({} tiles)", controller.tile_count()),
        Err(e) => error!("[APP] could not bind credits page: {}", e),
    }
}
