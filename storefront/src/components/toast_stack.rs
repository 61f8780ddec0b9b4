use dioxus::prelude::*;

use crate::notifications::{toast_offset_px, Toast};

/// Live notifications, stacked top-right in insertion order.
#[component]
pub fn ToastStack(toasts: Signal<Vec<Toast>>) -> Element {
    let live = toasts.read().clone();

    rsx! {
        for (index, toast) in live.into_iter().enumerate() {
            ToastCard {
                key: "{toast.notification.id}",
                top_px: toast_offset_px(index),
                toast,
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast, top_px: u32) -> Element {
    let transform = toast.phase.transform();

    rsx! {
        div {
            class: "notification",
            style: "position: fixed; top: {top_px}px; right: 20px; background: var(--accent-color); color: white; padding: 15px 25px; border-radius: 10px; box-shadow: 0 5px 15px rgba(0,0,0,0.2); z-index: 1000; transform: {transform}; transition: transform 0.3s ease, top 0.3s ease; max-width: 300px;",
            "{toast.notification.message}"
        }
    }
}
