use std::rc::Rc;

use dioxus::prelude::*;

use crate::catalog::CatalogStore;
use crate::components::styles::{FONT_AWESOME_HREF, STOREFRONT_STYLES};
use crate::components::{ProductGrid, ThemeToggle, ToastStack};
use crate::config::StorefrontConfig;
use crate::notifications::Toast;
use crate::sequencer::ButtonView;
use crate::storefront::effects;
use crate::storefront::theme::{LocalThemeStorage, ThemeController};

#[component]
pub fn StorefrontShell(config: StorefrontConfig) -> Element {
    let catalog = use_hook(|| Rc::new(CatalogStore::builtin()));
    let toasts = use_signal(Vec::<Toast>::new);
    let storage_key = config.theme_storage_key.clone();
    let theme = use_signal(move || ThemeController::initialize(LocalThemeStorage::new(storage_key)));
    let timings = config.timings;

    {
        let product_count = catalog.len();
        use_hook(move || {
            effects::initialize_theme(theme, product_count);
            effects::install_keyboard_shortcut(theme, timings.theme_fade_ms);
        });
    }

    // Cards exist once the first render is applied.
    {
        let reveal = config.reveal.clone();
        use_effect(move || {
            effects::reveal_product_cards(&reveal);
        });
    }

    let toggle_theme = use_callback(move |_| {
        effects::toggle_theme(theme, timings.theme_fade_ms);
    });

    let on_buy = {
        let catalog = catalog.clone();
        use_callback(move |(product_id, control): (u32, Signal<ButtonView>)| {
            effects::buy(&catalog, product_id, control, toasts, timings);
        })
    };

    let current_theme = theme.read().current();
    let products = catalog.products().to_vec();

    rsx! {
        style { {STOREFRONT_STYLES} }

        link {
            rel: "stylesheet",
            href: FONT_AWESOME_HREF,
        }

        div {
            class: "storefront-shell",

            header {
                class: "storefront-header",
                h1 { "Product Showcase" }
                ThemeToggle { current_theme, on_toggle: toggle_theme }
            }

            main {
                ProductGrid {
                    container_id: config.container_id.clone(),
                    products,
                    on_buy,
                }
            }
        }

        ToastStack { toasts }
    }
}
