use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use storefront::{Storefront, StorefrontConfig};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(StorefrontConfig::load);

    rsx! {
        Storefront { config }
    }
}
