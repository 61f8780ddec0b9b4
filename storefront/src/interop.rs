use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;

use crate::scheduler::Scheduler;
use crate::storefront::theme::is_theme_shortcut;

pub const FADED_OPACITY: &str = "0.8";

/// Route Ctrl/Cmd+T to `on_toggle`, suppressing the browser's new-tab action.
pub fn install_theme_shortcut<F>(mut on_toggle: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if is_theme_shortcut(&event.key(), event.ctrl_key(), event.meta_key()) {
            event.prevent_default();
            on_toggle();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;

    // Keep listener alive for app lifetime.
    callback.forget();
    Ok(())
}

fn set_body_opacity(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("opacity", value);
    }
}

/// Brief whole-page fade used as the theme-change cue.
pub fn fade_page<S: Scheduler>(scheduler: &S, duration_ms: u32) {
    set_body_opacity(FADED_OPACITY);
    scheduler.schedule(duration_ms, Box::new(|| set_body_opacity("1")));
}
