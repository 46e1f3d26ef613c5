//! Rick and Morty Explorer Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod logging;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
