//! Timing primitives for the simulated latency and the city debounce.
//!
//! The app never does real network I/O; the pauses before a search or a
//! registration completes only imitate it. They go through [`Delay`] so the
//! browser can use real timers while tests complete instantly.

use futures::future::{self, FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};

/// Something that can wait for a number of milliseconds
pub trait Delay {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Resolves every sleep immediately and remembers what was asked for
#[derive(Debug, Default)]
pub struct ImmediateDelay {
    requested: RefCell<Vec<u32>>,
}

impl ImmediateDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations passed to `sleep`, oldest first
    pub fn requested(&self) -> Vec<u32> {
        self.requested.borrow().clone()
    }
}

impl Delay for ImmediateDelay {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        self.requested.borrow_mut().push(ms);
        future::ready(()).boxed_local()
    }
}

/// A position in a burst of debounced triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce bookkeeping.
///
/// Each trigger takes a ticket and waits out the quiet period; once awake it
/// only proceeds if no newer ticket was issued in the meantime, so only the
/// last trigger of a burst does any work.
#[derive(Debug, Default)]
pub struct Debouncer {
    latest: Cell<u64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Wait out the quiet period, returning whether this trigger should run
    pub async fn settle<D: Delay + ?Sized>(&self, delay: &D, quiet_ms: u32) -> bool {
        let ticket = self.trigger();
        delay.sleep(quiet_ms).await;
        self.is_current(ticket)
    }
}
