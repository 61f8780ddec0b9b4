use dioxus::prelude::{ReadableExt, Signal, WritableExt};

use crate::catalog::CatalogStore;
use crate::config::SequenceTimings;
use crate::interop::{fade_page, install_theme_shortcut};
use crate::notifications::{show_notification, Toast};
use crate::scheduler::BrowserScheduler;
use crate::sequencer::{handle_buy_click, ButtonView};
use crate::storefront::theme::{apply_theme_to_document, LocalThemeStorage, ThemeController};
use crate::visibility::{observe_product_cards, RevealOptions};

pub type PageTheme = ThemeController<LocalThemeStorage>;

pub fn initialize_theme(theme: Signal<PageTheme>, product_count: usize) {
    let current = theme.peek().current();
    apply_theme_to_document(current);
    dioxus_logger::tracing::info!(
        "Storefront ready: {} products, theme={}",
        product_count,
        current
    );
}

/// Shared by the toggle button and the keyboard shortcut.
pub fn toggle_theme(mut theme: Signal<PageTheme>, fade_ms: u32) {
    let next = theme.write().toggle();
    apply_theme_to_document(next);
    fade_page(&BrowserScheduler, fade_ms);
    dioxus_logger::tracing::debug!("Theme switched to {}", next);
}

pub fn install_keyboard_shortcut(theme: Signal<PageTheme>, fade_ms: u32) {
    if let Err(e) = install_theme_shortcut(move || toggle_theme(theme, fade_ms)) {
        dioxus_logger::tracing::warn!("Failed to install theme shortcut: {:?}", e);
    }
}

pub fn reveal_product_cards(options: &RevealOptions) {
    match observe_product_cards(options) {
        Ok(count) => dioxus_logger::tracing::debug!("Observing {} product cards", count),
        Err(e) => dioxus_logger::tracing::warn!("Failed to observe product cards: {:?}", e),
    }
}

pub fn buy(
    catalog: &CatalogStore,
    product_id: u32,
    control: Signal<ButtonView>,
    toasts: Signal<Vec<Toast>>,
    timings: SequenceTimings,
) {
    handle_buy_click(
        catalog,
        product_id,
        control,
        BrowserScheduler,
        timings,
        move |notification| {
            show_notification(toasts, BrowserScheduler, notification, &timings);
        },
    );
}
