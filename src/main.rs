#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;

mod config;
mod controller;
mod ports;
mod theme;
mod toggle;
mod web;

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("logger failed to init");

    launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        web_sys::window()
            .map(|w| config::Config::from_window(&w))
            .unwrap_or_default()
    });
    rsx! {
        header { class: "flex justify-end p-2 bg-slate-100 dark:bg-zinc-800",
            toggle::ThemeToggle { config }
        }
    }
}
