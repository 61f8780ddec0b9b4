use dioxus::prelude::*;
use shared_types::ThemePreference;

use crate::storefront::theme::toggle_affordance;

pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Shows the action the user would take next: a sun and "Light Mode" while
/// dark is active, a moon and "Dark Mode" while light is active.
#[component]
pub fn ThemeToggle(current_theme: ThemePreference, on_toggle: Callback<()>) -> Element {
    let affordance = toggle_affordance(current_theme);

    rsx! {
        button {
            id: THEME_TOGGLE_ID,
            class: "theme-toggle",
            title: "Toggle theme (Ctrl+T)",
            onclick: move |_| on_toggle.call(()),
            i { class: affordance.icon_class }
            span { class: "toggle-text", {affordance.label} }
        }
    }
}
