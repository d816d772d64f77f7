//! Credit Tile Controller
//!
//! Binds once to the server-rendered credits page and drives every
//! client-side interaction: theme, search/filter, pending items and the
//! claim/unclaim workflow.

use std::any::Any;
use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use leptos::logging::{error, log, warn};
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos_swipe::{bind_global_swipe, create_swipe_signals, SwipeDirection, SWIPE_THRESHOLD_PX};
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::claim::{ClaimFormState, FormPost};
use crate::components::{ClaimForm, ItemTags};
use crate::config::{ClaimMode, PageConfig};
use crate::dom::{self, BoundTile, TILE_ACTIONS_SELECTOR};
use crate::error::{CreateFormError, ItemError, PageError, SubmitError};
use crate::filter::{self, FilterResult};
use crate::items::PendingItems;
use crate::models::StatusFilter;
use crate::store::{
    store_add_item, store_toggle_theme, CreditsState, CreditsStateStoreFields, CreditsStore,
};
use crate::theme;
use crate::validation::{self, ClaimDetails};

const THEME_TOGGLE_ID: &str = "theme-toggle";
const SEARCH_INPUT_ID: &str = "credit-search";
const NO_RESULTS_ID: &str = "no-results";
const ITEM_INPUT_ID: &str = "item-input";
const ADD_ITEM_BUTTON_ID: &str = "add-item-btn";
const ITEMS_TAGS_ID: &str = "items-tags";
const ITEMS_HIDDEN_ID: &str = "items-hidden";
const CREATE_FORM_ID: &str = "create-credit-form";
const FILTER_BUTTON_SELECTOR: &str = ".filter-btn[data-filter]";

pub const UNCLAIM_CONFIRM_MESSAGE: &str = "Are you sure you want to unclaim this credit?";

/// Mounted claim forms, keyed by credit code. Dropping a handle unmounts its form.
type MountedForms = HashMap<String, Box<dyn Any>>;

/// Controller handle; copies share the same state
#[derive(Clone, Copy)]
pub struct CreditTileController {
    store: CreditsStore,
    config: StoredValue<PageConfig>,
    tiles: StoredValue<Vec<BoundTile>, LocalStorage>,
    mounted_forms: StoredValue<MountedForms, LocalStorage>,
}

impl CreditTileController {
    /// Apply the saved theme and bind every page control. Call once per page load.
    pub fn initialize() -> Result<Self, PageError> {
        let theme = theme::load_theme();
        theme::apply_theme(theme)?;

        let config = dom::read_page_config()?;
        let tiles = dom::collect_tiles()?;
        log!(
            "[APP] {} credit tiles, claim via {} ({:?}), unclaim via {}",
            tiles.len(),
            config.claim_url,
            config.claim_mode,
            config.unclaim_url
        );

        let controller = Self {
            store: Store::new(CreditsState::new(theme)),
            config: StoredValue::new(config),
            tiles: StoredValue::new_local(tiles),
            mounted_forms: StoredValue::new_local(MountedForms::new()),
        };

        controller.bind_theme_toggle()?;
        controller.bind_search()?;
        controller.bind_filter_buttons()?;
        controller.bind_tiles()?;
        controller.bind_item_entry()?;
        controller.bind_create_form()?;
        Ok(controller)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.with_value(|tiles| tiles.len())
    }

    fn tile_element(&self, code: &str) -> Option<web_sys::HtmlElement> {
        self.tiles.with_value(|tiles| {
            tiles
                .iter()
                .find(|bound| bound.tile.code == code)
                .map(|bound| bound.element.clone())
        })
    }

    // ========================
    // Theme
    // ========================

    fn bind_theme_toggle(&self) -> Result<(), PageError> {
        let Some(toggle) = dom::element_by_id::<web_sys::HtmlElement>(THEME_TOGGLE_ID) else {
            return Ok(());
        };
        let controller = *self;
        dom::listen(&toggle, "click", move |_| controller.toggle_theme())
    }

    pub fn toggle_theme(&self) {
        let theme = store_toggle_theme(&self.store);
        if let Err(e) = theme::save_theme(theme) {
            warn!("[THEME] could not persist theme: {}", e);
        }
        if let Err(e) = theme::apply_theme(theme) {
            error!("[THEME] could not apply theme: {}", e);
        }
    }

    // ========================
    // Search / filter
    // ========================

    fn bind_search(&self) -> Result<(), PageError> {
        let store = self.store;
        if let Some(input) = dom::element_by_id::<web_sys::HtmlInputElement>(SEARCH_INPUT_ID) {
            let reader = input.clone();
            dom::listen(&input, "input", move |_| store.query().set(reader.value()))?;
        }

        // Re-run on every keystroke and category change
        let controller = *self;
        Effect::new(move |_| {
            let query = store.query().get();
            let status = store.status_filter().get();
            controller.filter_tiles(&query, status);
        });
        Ok(())
    }

    /// Show matching tiles, hide the rest, and toggle the no-results indicator
    pub fn filter_tiles(&self, query: &str, status: StatusFilter) -> FilterResult {
        let result = self.tiles.with_value(|tiles| {
            let result = filter::filter_tiles(tiles.iter().map(|bound| &bound.tile), query, status);
            for (bound, visible) in tiles.iter().zip(&result.visible) {
                dom::set_displayed(&bound.element, *visible, "flex");
            }
            result
        });
        if let Some(indicator) = dom::element_by_id::<web_sys::HtmlElement>(NO_RESULTS_ID) {
            dom::set_displayed(&indicator, result.show_no_results(), "block");
        }
        result
    }

    fn bind_filter_buttons(&self) -> Result<(), PageError> {
        let root = dom::document()?.document_element().ok_or(PageError::Missing("html"))?;
        let buttons: Vec<web_sys::HtmlElement> = dom::query_all(&root, FILTER_BUTTON_SELECTOR)?;
        if buttons.is_empty() {
            return Ok(());
        }

        let store = self.store;
        for button in &buttons {
            let Some(filter) = button_filter(button) else {
                warn!("[FILTER] unknown data-filter on filter button");
                continue;
            };
            dom::listen(button, "click", move |_| store.status_filter().set(filter))?;
        }

        Effect::new(move |_| {
            let current = store.status_filter().get();
            for button in &buttons {
                let _ = button
                    .class_list()
                    .toggle_with_force("active", button_filter(button) == Some(current));
            }
        });

        let controller = *self;
        bind_global_swipe(create_swipe_signals(), SWIPE_THRESHOLD_PX, move |direction| {
            controller.swipe(direction)
        });
        Ok(())
    }

    /// Move to the neighbouring filter category
    pub fn swipe(&self, direction: SwipeDirection) {
        let current = self.store.status_filter().get_untracked();
        let next = filter::step_filter(current, direction);
        if next != current {
            log!("[SWIPE] {:?}: {} -> {}", direction, current.as_str(), next.as_str());
            self.store.status_filter().set(next);
        }
    }

    // ========================
    // Claim / unclaim
    // ========================

    fn bind_tiles(&self) -> Result<(), PageError> {
        let bindings: Vec<(String, web_sys::HtmlElement)> = self.tiles.with_value(|tiles| {
            tiles
                .iter()
                .map(|bound| (bound.tile.code.clone(), bound.element.clone()))
                .collect()
        });

        for (code, element) in bindings {
            let controller = *self;
            for button in dom::query_all::<web_sys::HtmlElement>(&element, ".btn-claim")? {
                let code = code.clone();
                dom::listen(&button, "click", move |_| controller.claim_clicked(&code))?;
            }
            for button in dom::query_all::<web_sys::HtmlElement>(&element, ".btn-unclaim")? {
                let code = code.clone();
                dom::listen(&button, "click", move |_| {
                    if let Err(e) = controller.submit_unclaim(&code) {
                        error!("[CLAIM] unclaim of {} failed: {}", code, e);
                    }
                })?;
            }
        }
        Ok(())
    }

    fn claim_clicked(&self, code: &str) {
        match self.config.with_value(|config| config.claim_mode) {
            ClaimMode::Direct => {
                if let Err(e) = self.submit_claim(code, None) {
                    error!("[CLAIM] claim of {} failed: {}", code, e);
                }
            }
            ClaimMode::Customer => self.show_claim_form(code),
        }
    }

    pub fn claim_form_state(&self, code: &str) -> ClaimFormState {
        self.store.claim_forms().with_untracked(|forms| forms.state(code))
    }

    /// Open the inline claim form inside a tile. No-op when already open.
    pub fn show_claim_form(&self, code: &str) {
        if self.claim_form_state(code) == ClaimFormState::FormOpen {
            return;
        }
        let Some(element) = self.tile_element(code) else {
            warn!("[CLAIM] no tile with code {}", code);
            return;
        };
        self.store.claim_forms().write().show(code);

        set_footer_displayed(&element, false);

        let controller = *self;
        let form_code = code.to_string();
        let handle = mount_to(element, move || {
            view! { <ClaimForm controller=controller code=form_code /> }
        });

        let previous = self
            .mounted_forms
            .try_update_value(|forms| {
                forms.insert(code.to_string(), Box::new(handle) as Box<dyn Any>)
            })
            .flatten();
        if let Some(previous) = previous {
            unmount_later(previous);
        }
    }

    /// Remove the inline claim form and restore the tile footer
    pub fn hide_claim_form(&self, code: &str) {
        if !self.store.claim_forms().write().hide(code) {
            return;
        }
        let handle = self
            .mounted_forms
            .try_update_value(|forms| forms.remove(code))
            .flatten();
        if let Some(handle) = handle {
            unmount_later(handle);
        }
        if let Some(element) = self.tile_element(code) {
            set_footer_displayed(&element, true);
        }
    }

    /// Validate collected details (if any) and post the claim. Navigates away on success.
    pub fn submit_claim(
        &self,
        code: &str,
        details: Option<ClaimDetails>,
    ) -> Result<(), SubmitError> {
        let details = details
            .map(|details| validation::validate_claim(&details))
            .transpose()?;

        let endpoint = self.config.with_value(|config| config.claim_url.clone());
        let post = FormPost::claim(&endpoint, code, details.as_ref());
        log!("[CLAIM] posting claim for {} to {}", code, endpoint);
        dom::submit_form_post(&post)?;

        // The page is navigating; the form's state ends here
        self.store.claim_forms().write().hide(code);
        Ok(())
    }

    /// Ask for confirmation, then post the unclaim. Returns whether it was posted.
    pub fn submit_unclaim(&self, code: &str) -> Result<bool, SubmitError> {
        if !dom::confirm(UNCLAIM_CONFIRM_MESSAGE) {
            return Ok(false);
        }
        let endpoint = self.config.with_value(|config| config.unclaim_url.clone());
        let post = FormPost::unclaim(&endpoint, code);
        log!("[CLAIM] posting unclaim for {} to {}", code, endpoint);
        dom::submit_form_post(&post)?;
        Ok(true)
    }

    // ========================
    // Pending items
    // ========================

    fn bind_item_entry(&self) -> Result<(), PageError> {
        let controller = *self;
        if let Some(input) = dom::element_by_id::<web_sys::HtmlInputElement>(ITEM_INPUT_ID) {
            dom::listen(&input, "keypress", move |ev| {
                let is_enter = ev
                    .dyn_ref::<web_sys::KeyboardEvent>()
                    .map(|key| key.key() == "Enter")
                    .unwrap_or(false);
                if is_enter {
                    ev.prevent_default();
                    controller.add_item_from_input();
                }
            })?;
        }
        if let Some(button) = dom::element_by_id::<web_sys::HtmlElement>(ADD_ITEM_BUTTON_ID) {
            dom::listen(&button, "click", move |ev| {
                ev.prevent_default();
                controller.add_item_from_input();
            })?;
        }

        let store = self.store;
        if let Some(container) = dom::element_by_id::<web_sys::HtmlElement>(ITEMS_TAGS_ID) {
            container.set_inner_html("");
            mount_to(container, move || view! { <ItemTags store=store /> }).forget();
        }

        // Keep the hidden field in sync with the list
        Effect::new(move |_| {
            let json = store.items().with(PendingItems::to_json);
            let Some(hidden) = dom::element_by_id::<web_sys::HtmlInputElement>(ITEMS_HIDDEN_ID)
            else {
                return;
            };
            match json {
                Ok(json) => hidden.set_value(&json),
                Err(e) => error!("[ITEMS] could not serialize items: {}", e),
            }
        });
        Ok(())
    }

    pub fn add_item(&self, text: &str) -> Result<(), ItemError> {
        store_add_item(&self.store, text)
    }

    /// Add the item input's text; clear it on success and keep focus on it
    fn add_item_from_input(&self) {
        let Some(input) = dom::element_by_id::<web_sys::HtmlInputElement>(ITEM_INPUT_ID) else {
            return;
        };
        match self.add_item(&input.value()) {
            Ok(()) => input.set_value(""),
            Err(e) => log!("[ITEMS] not added: {}", e),
        }
        let _ = input.focus();
    }

    fn bind_create_form(&self) -> Result<(), PageError> {
        let Some(form) = dom::element_by_id::<web_sys::HtmlFormElement>(CREATE_FORM_ID) else {
            return Ok(());
        };
        let controller = *self;
        let target = form.clone();
        dom::listen(&form, "submit", move |ev| {
            if let Err(e) = controller.check_create_form(&target) {
                ev.prevent_default();
                dom::alert(&e.to_string());
                if let CreateFormError::Customer(invalid) = e {
                    if let Some(input) = form_input(&target, invalid.field().name()) {
                        let _ = input.focus();
                    }
                }
            }
        })
    }

    /// Create-credit guard: at least one item, plus valid customer details when
    /// the form asks for them
    pub fn check_create_form(
        &self,
        form: &web_sys::HtmlFormElement,
    ) -> Result<(), CreateFormError> {
        self.store.items().with_untracked(PendingItems::ensure_submittable)?;

        let name = form_input(form, "customer_name");
        let phone = form_input(form, "customer_phone");
        if let (Some(name), Some(phone)) = (name, phone) {
            validation::validate_claim(&ClaimDetails::new(name.value(), phone.value()))?;
        }
        Ok(())
    }
}

fn button_filter(button: &web_sys::HtmlElement) -> Option<StatusFilter> {
    button
        .get_attribute("data-filter")
        .and_then(|value| StatusFilter::parse(&value))
}

fn set_footer_displayed(tile: &web_sys::HtmlElement, visible: bool) {
    let footer = tile
        .query_selector(TILE_ACTIONS_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(footer) = footer {
        dom::set_displayed(&footer, visible, "");
    }
}

fn form_input(form: &web_sys::HtmlFormElement, name: &str) -> Option<web_sys::HtmlInputElement> {
    form.query_selector(&format!("input[name='{}']", name))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
}

/// Drop a mount handle on the next tick, outside the event that asked for it
fn unmount_later(handle: Box<dyn Any>) {
    Timeout::new(0, move || drop(handle)).forget();
}
