//! Booking Frontend Entry Point

mod api;
mod app;
mod client;
mod components;
mod config;
mod context;
mod error;
mod flow;
mod form;
mod models;
mod refresh;
mod render;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] Booking client starting");
    mount_to_body(App);
}
