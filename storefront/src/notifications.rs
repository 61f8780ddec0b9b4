//! Transient "added to cart" notifications.
//!
//! Lifecycle of one notification, relative to insertion:
//!
//! ```text
//! 0ms        inserted off-screen (Entering)
//! enter_ms   slides in (Visible)
//! dwell_ms   slides out (Leaving)
//! +exit_ms   removed
//! ```

use dioxus::prelude::*;
use shared_types::Notification;

use crate::config::SequenceTimings;
use crate::scheduler::Scheduler;

const TOP_OFFSET_PX: u32 = 20;
const STACK_SPACING_PX: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

impl ToastPhase {
    pub fn transform(&self) -> &'static str {
        match self {
            ToastPhase::Visible => "translateX(0)",
            ToastPhase::Entering | ToastPhase::Leaving => "translateX(100%)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub phase: ToastPhase,
}

/// Where notifications are displayed.
pub trait NotificationSurface: Clone + 'static {
    /// Insert fully off-screen.
    fn insert(&mut self, notification: &Notification);
    fn set_phase(&mut self, id: &str, phase: ToastPhase);
    fn remove(&mut self, id: &str);
}

impl NotificationSurface for Signal<Vec<Toast>> {
    fn insert(&mut self, notification: &Notification) {
        if let Ok(mut toasts) = self.try_write() {
            toasts.push(Toast {
                notification: notification.clone(),
                phase: ToastPhase::Entering,
            });
        }
    }

    fn set_phase(&mut self, id: &str, phase: ToastPhase) {
        if let Ok(mut toasts) = self.try_write() {
            if let Some(toast) = toasts.iter_mut().find(|t| t.notification.id == id) {
                toast.phase = phase;
            }
        }
    }

    fn remove(&mut self, id: &str) {
        if let Ok(mut toasts) = self.try_write() {
            toasts.retain(|t| t.notification.id != id);
        }
    }
}

/// Vertical position of the toast at `index` in the live stack.
pub fn toast_offset_px(index: usize) -> u32 {
    TOP_OFFSET_PX + STACK_SPACING_PX * index as u32
}

/// Display `notification` and schedule its full lifecycle. Each call is an
/// independent timer chain.
pub fn show_notification<N, S>(
    mut surface: N,
    scheduler: S,
    notification: Notification,
    timings: &SequenceTimings,
) where
    N: NotificationSurface,
    S: Scheduler,
{
    surface.insert(&notification);

    let id = notification.id;
    {
        let mut surface = surface.clone();
        let id = id.clone();
        scheduler.schedule(
            timings.notification_enter_ms,
            Box::new(move || surface.set_phase(&id, ToastPhase::Visible)),
        );
    }

    let exit_ms = timings.notification_exit_ms;
    let next = scheduler.clone();
    scheduler.schedule(
        timings.notification_dwell_ms,
        Box::new(move || {
            surface.set_phase(&id, ToastPhase::Leaving);
            next.schedule(exit_ms, Box::new(move || surface.remove(&id)));
        }),
    );
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::scheduler::ManualScheduler;

    #[derive(Clone, Default)]
    struct TestSurface {
        toasts: Rc<RefCell<Vec<Toast>>>,
    }

    impl TestSurface {
        fn phase_of(&self, id: &str) -> Option<ToastPhase> {
            self.toasts
                .borrow()
                .iter()
                .find(|t| t.notification.id == id)
                .map(|t| t.phase)
        }

        fn len(&self) -> usize {
            self.toasts.borrow().len()
        }
    }

    impl NotificationSurface for TestSurface {
        fn insert(&mut self, notification: &Notification) {
            self.toasts.borrow_mut().push(Toast {
                notification: notification.clone(),
                phase: ToastPhase::Entering,
            });
        }
        fn set_phase(&mut self, id: &str, phase: ToastPhase) {
            if let Some(t) = self
                .toasts
                .borrow_mut()
                .iter_mut()
                .find(|t| t.notification.id == id)
            {
                t.phase = phase;
            }
        }
        fn remove(&mut self, id: &str) {
            self.toasts.borrow_mut().retain(|t| t.notification.id != id);
        }
    }

    #[test]
    fn present_from_insertion_until_removal() {
        let surface = TestSurface::default();
        let scheduler = ManualScheduler::new();
        let notification = Notification::added_to_cart("Wireless Pro Headphones");
        let id = notification.id.clone();

        assert_eq!(surface.len(), 0);
        show_notification(
            surface.clone(),
            scheduler.clone(),
            notification,
            &SequenceTimings::default(),
        );
        assert_eq!(surface.phase_of(&id), Some(ToastPhase::Entering));

        scheduler.advance(100);
        assert_eq!(surface.phase_of(&id), Some(ToastPhase::Visible));

        scheduler.advance(2899);
        assert_eq!(surface.phase_of(&id), Some(ToastPhase::Visible));

        scheduler.advance(1);
        assert_eq!(surface.phase_of(&id), Some(ToastPhase::Leaving));

        scheduler.advance(299);
        assert_eq!(surface.phase_of(&id), Some(ToastPhase::Leaving));

        scheduler.advance(1);
        assert_eq!(surface.phase_of(&id), None);
        assert_eq!(surface.len(), 0);
        assert_eq!(scheduler.now_ms(), 3300);
    }

    #[test]
    fn overlapping_notifications_have_independent_lifetimes() {
        let surface = TestSurface::default();
        let scheduler = ManualScheduler::new();
        let timings = SequenceTimings::default();

        let first = Notification::new("first");
        let second = Notification::new("second");
        let (first_id, second_id) = (first.id.clone(), second.id.clone());

        show_notification(surface.clone(), scheduler.clone(), first, &timings);
        scheduler.advance(1000);
        show_notification(surface.clone(), scheduler.clone(), second, &timings);
        assert_eq!(surface.len(), 2);

        scheduler.advance(2300);
        assert_eq!(surface.phase_of(&first_id), None);
        assert_eq!(surface.phase_of(&second_id), Some(ToastPhase::Visible));

        scheduler.advance(1000);
        assert_eq!(surface.len(), 0);
    }

    #[test]
    fn phases_map_to_slide_transforms() {
        assert_eq!(ToastPhase::Entering.transform(), "translateX(100%)");
        assert_eq!(ToastPhase::Visible.transform(), "translateX(0)");
        assert_eq!(ToastPhase::Leaving.transform(), "translateX(100%)");
    }

    #[test]
    fn stacked_toasts_are_offset_vertically() {
        assert_eq!(toast_offset_px(0), 20);
        assert_eq!(toast_offset_px(1), 90);
        assert_eq!(toast_offset_px(2), 160);
    }
}
