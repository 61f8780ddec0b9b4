//! Storefront page - catalog, theme and cart feedback wiring

use dioxus::prelude::*;

mod effects;
mod shell;
pub mod theme;

pub use shell::StorefrontShell;

use crate::config::StorefrontConfig;

#[component]
pub fn Storefront(config: StorefrontConfig) -> Element {
    rsx! {
        StorefrontShell { config }
    }
}
