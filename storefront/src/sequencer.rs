//! "Add to cart" feedback sequence.
//!
//! Each control runs its own state machine:
//!
//! ```text
//! Idle --click--> Adding --adding_ms--> Added --added_ms--> Idle (+ notification)
//! ```
//!
//! A control is disabled for the whole of `Adding` and `Added`, so it can
//! never re-enter `Adding` while a sequence is in flight. Different controls
//! run concurrently and independently. Sequences are never cancelled.

use dioxus::prelude::*;
use shared_types::{ButtonFeedbackState, Notification};

use crate::catalog::CatalogStore;
use crate::config::SequenceTimings;
use crate::scheduler::Scheduler;

pub const BUY_LABEL: &str = "Add to Cart";
pub const ADDING_LABEL: &str = "Adding...";
pub const ADDED_LABEL: &str = "Added to Cart!";
pub const BUSY_CLASS: &str = "loading";
pub const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #48bb78, #38a169)";

/// The originating action control, passed explicitly into the sequence.
pub trait FeedbackControl: Clone + 'static {
    fn state(&self) -> ButtonFeedbackState;
    fn set_state(&mut self, state: ButtonFeedbackState);
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
    fn set_busy(&mut self, busy: bool);
    fn set_disabled(&mut self, disabled: bool);
    fn set_success(&mut self, success: bool);
}

/// Render state of a buy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub state: ButtonFeedbackState,
    pub label: String,
    pub busy: bool,
    pub disabled: bool,
    pub success: bool,
}

impl ButtonView {
    pub fn idle(label: &str) -> Self {
        Self {
            state: ButtonFeedbackState::Idle,
            label: label.to_string(),
            busy: false,
            disabled: false,
            success: false,
        }
    }

    pub fn class(&self) -> String {
        if self.busy {
            format!("buy-button {BUSY_CLASS}")
        } else {
            "buy-button".to_string()
        }
    }

    /// Inline style for the success treatment; idle and busy buttons carry none.
    pub fn style(&self) -> Option<String> {
        self.success.then(|| format!("background: {SUCCESS_BACKGROUND};"))
    }
}

impl Default for ButtonView {
    fn default() -> Self {
        Self::idle(BUY_LABEL)
    }
}

impl FeedbackControl for Signal<ButtonView> {
    fn state(&self) -> ButtonFeedbackState {
        self.try_peek().map(|view| view.state).unwrap_or_default()
    }

    fn set_state(&mut self, state: ButtonFeedbackState) {
        if let Ok(mut view) = self.try_write() {
            view.state = state;
        }
    }

    fn label(&self) -> String {
        self.try_peek()
            .map(|view| view.label.clone())
            .unwrap_or_default()
    }

    fn set_label(&mut self, label: &str) {
        if let Ok(mut view) = self.try_write() {
            view.label = label.to_string();
        }
    }

    fn set_busy(&mut self, busy: bool) {
        if let Ok(mut view) = self.try_write() {
            view.busy = busy;
        }
    }

    fn set_disabled(&mut self, disabled: bool) {
        if let Ok(mut view) = self.try_write() {
            view.disabled = disabled;
        }
    }

    fn set_success(&mut self, success: bool) {
        if let Ok(mut view) = self.try_write() {
            view.success = success;
        }
    }
}

/// Idle -> Adding. Returns the label to restore at the end.
pub fn begin_adding<C: FeedbackControl>(control: &mut C) -> String {
    let original_label = control.label();
    control.set_label(ADDING_LABEL);
    control.set_busy(true);
    control.set_disabled(true);
    control.set_state(ButtonFeedbackState::Adding);
    original_label
}

/// Adding -> Added.
pub fn mark_added<C: FeedbackControl>(control: &mut C) {
    control.set_label(ADDED_LABEL);
    control.set_success(true);
    control.set_state(ButtonFeedbackState::Added);
}

/// Added -> Idle.
pub fn restore_idle<C: FeedbackControl>(control: &mut C, original_label: &str) {
    control.set_label(original_label);
    control.set_busy(false);
    control.set_disabled(false);
    control.set_success(false);
    control.set_state(ButtonFeedbackState::Idle);
}

/// Start the feedback sequence for `product_id` on `control`.
///
/// Returns `false` without touching the control when the id is not in the
/// catalog or the control is already mid-sequence. `on_complete` receives the
/// notification once the control is back to idle.
pub fn handle_buy_click<C, S, F>(
    catalog: &CatalogStore,
    product_id: u32,
    mut control: C,
    scheduler: S,
    timings: SequenceTimings,
    on_complete: F,
) -> bool
where
    C: FeedbackControl,
    S: Scheduler,
    F: FnOnce(Notification) + 'static,
{
    let Some(product) = catalog.find(product_id) else {
        dioxus_logger::tracing::debug!("Ignoring buy click for unknown product {}", product_id);
        return false;
    };

    if control.state() != ButtonFeedbackState::Idle {
        dioxus_logger::tracing::debug!(
            "Ignoring buy click for product {} while {:?}",
            product_id,
            control.state()
        );
        return false;
    }

    let product_name = product.name.clone();
    let original_label = begin_adding(&mut control);

    let next = scheduler.clone();
    scheduler.schedule(
        timings.adding_ms,
        Box::new(move || {
            mark_added(&mut control);

            next.schedule(
                timings.added_ms,
                Box::new(move || {
                    restore_idle(&mut control, &original_label);
                    dioxus_logger::tracing::debug!("{} added to cart", product_name);
                    on_complete(Notification::added_to_cart(&product_name));
                }),
            );
        }),
    );

    true
}
