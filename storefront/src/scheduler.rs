//! Timer abstraction for the feedback and notification sequences.
//!
//! Every multi-step sequence is a chain of independently scheduled callbacks.
//! The browser runs them on `setTimeout`; tests drive a virtual clock.

use std::cell::RefCell;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce() + 'static>;

pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// `setTimeout`-backed scheduler. Timers are never cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

struct PendingTask {
    due_ms: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Virtual clock. Tasks run in due-time order, FIFO among equal due times.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, running every task that falls due on the way.
    /// Tasks scheduled by running tasks are honored within the same call.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.clock.borrow().now_ms + delta_ms;

        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let index = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due_ms <= target)
                    .min_by_key(|(_, p)| (p.due_ms, p.seq))
                    .map(|(i, _)| i);
                index.map(|i| {
                    let pending = clock.pending.remove(i);
                    clock.now_ms = pending.due_ms;
                    pending.task
                })
            };

            match next {
                // The borrow is released before the task can schedule more work.
                Some(task) => task(),
                None => break,
            }
        }

        self.clock.borrow_mut().now_ms = target;
    }

    /// Run everything that is pending, however far out.
    pub fn run_until_idle(&self) {
        loop {
            let furthest = {
                let clock = self.clock.borrow();
                clock.pending.iter().map(|p| p.due_ms).max()
            };
            match furthest {
                Some(due) => {
                    let now = self.now_ms();
                    self.advance(due.saturating_sub(now));
                }
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms + u64::from(delay_ms);
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(PendingTask { due_ms, seq, task });
    }
}
