mod api;
mod app;
mod components;
mod config;
mod icons;
mod listing;
mod pages;
mod selection;
mod services;
mod validation;

use crate::app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
