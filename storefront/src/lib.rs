pub mod catalog;
pub mod components;
pub mod config;
pub mod interop;
pub mod notifications;
pub mod scheduler;
pub mod sequencer;
pub mod storefront;
pub mod visibility;

pub use catalog::{CatalogError, CatalogStore};
pub use components::*;
pub use config::*;
pub use notifications::{show_notification, NotificationSurface, Toast, ToastPhase};
pub use scheduler::{BrowserScheduler, ManualScheduler, Scheduler};
pub use sequencer::{handle_buy_click, ButtonView, FeedbackControl};
pub use storefront::*;
