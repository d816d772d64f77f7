//! DOM Bindings
//!
//! Thin web-sys layer over the server-rendered page.

use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::claim::FormPost;
use crate::config::PageConfig;
use crate::error::PageError;
use crate::models::CreditTile;

/// Container carrying the page configuration
pub const GRID_SELECTOR: &str = ".credits-grid";
pub const TILE_SELECTOR: &str = ".credit-tile";
/// Tile footer hidden while the claim form is open
pub const TILE_ACTIONS_SELECTOR: &str = ".credit-actions";

/// A tile view-model together with the element it was read from
#[derive(Clone)]
pub struct BoundTile {
    pub tile: CreditTile,
    pub element: web_sys::HtmlElement,
}

pub fn document() -> Result<web_sys::Document, PageError> {
    web_sys::window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements under `root` matching `selector`, cast to `T`
pub fn query_all<T: JsCast>(root: &web_sys::Element, selector: &str) -> Result<Vec<T>, PageError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn read_page_config() -> Result<PageConfig, PageError> {
    let grid = document()?.query_selector(GRID_SELECTOR)?;
    Ok(match grid {
        Some(grid) => PageConfig::from_attributes(|name| grid.get_attribute(name)),
        None => PageConfig::default(),
    })
}

/// Read every tile on the page into a view-model, skipping tiles without a code
pub fn collect_tiles() -> Result<Vec<BoundTile>, PageError> {
    let Some(root) = document()?.document_element() else {
        return Ok(Vec::new());
    };
    let elements: Vec<web_sys::HtmlElement> = query_all(&root, TILE_SELECTOR)?;
    Ok(elements
        .into_iter()
        .filter_map(|element| {
            match CreditTile::from_data_attributes(|name| element.get_attribute(name)) {
                Some(tile) => Some(BoundTile { tile, element }),
                None => {
                    warn!("[APP] skipping credit tile without data-code");
                    None
                }
            }
        })
        .collect())
}

/// Show or hide an element through its inline display style
pub fn set_displayed(element: &web_sys::HtmlElement, visible: bool, display: &str) {
    let value = if visible { display } else { "none" };
    if let Err(e) = element.style().set_property("display", value) {
        warn!("[APP] could not set display: {:?}", e);
    }
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Blocking confirmation prompt; false when the browser refuses to show it
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Build a hidden POST form, append it to the body and submit it
pub fn submit_form_post(post: &FormPost) -> Result<(), PageError> {
    let document = document()?;
    let body = document.body().ok_or(PageError::Missing("body"))?;

    let form: web_sys::HtmlFormElement = document
        .create_element("form")?
        .dyn_into()
        .map_err(|_| PageError::Js("created element is not a form".to_string()))?;
    form.set_method(FormPost::METHOD);
    form.set_action(&post.action);

    for (name, value) in &post.fields {
        let input: web_sys::HtmlInputElement = document
            .create_element("input")?
            .dyn_into()
            .map_err(|_| PageError::Js("created element is not an input".to_string()))?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)?;
    }

    body.append_child(&form)?;
    form.submit()?;
    Ok(())
}
