//! Credits Page Frontend Entry Point

mod app;
mod claim;
mod components;
mod config;
mod controller;
mod dom;
mod error;
mod filter;
mod items;
mod models;
mod store;
mod theme;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
