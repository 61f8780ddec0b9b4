//! One-shot scroll reveal for product cards.

use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const CARD_SELECTOR: &str = ".product-card";

// Browsers report ratios like 0.0999 when crossing a 0.1 threshold.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the card that must be visible
    pub threshold: f64,
    /// Negative bottom margin fires the reveal slightly before the card is fully on-screen
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

pub fn should_reveal(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// Register every rendered card with an intersection observer. Cards are
/// revealed once and then unobserved. Without observer support every card is
/// revealed immediately.
pub fn observe_product_cards(options: &RevealOptions) -> Result<usize, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let cards = document.query_selector_all(CARD_SELECTOR)?;

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let threshold = options.threshold;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !should_reveal(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    continue;
                }
                let target = entry.target();
                reveal_card(&target);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                dioxus_logger::tracing::warn!(
                    "IntersectionObserver unavailable, revealing cards immediately: {:?}",
                    e
                );
                for index in 0..cards.length() {
                    if let Some(card) = cards.get(index).and_then(|n| n.dyn_into().ok()) {
                        reveal_card(&card);
                    }
                }
                return Ok(0);
            }
        };

    let mut observed = 0;
    for index in 0..cards.length() {
        if let Some(card) = cards
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            observer.observe(&card);
            observed += 1;
        }
    }

    // Keep the callback alive for the page lifetime.
    callback.forget();
    Ok(observed)
}

fn reveal_card(card: &web_sys::Element) {
    let Some(card) = card.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = card.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}
