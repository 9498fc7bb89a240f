//! Single-slot debounce timer
//!
//! The debouncer does not know how timers are spawned. The caller hands it a
//! handle for each scheduled timer; scheduling again cancels the previous one.
//! When a timer elapses it must call [`Debouncer::fire`] with its ticket and
//! only act if that returns true.

/// Idle delay after the last edit before an analysis is triggered.
pub const DEBOUNCE_DELAY_MS: u32 = 700;

/// A running timer that can be stopped before it elapses.
pub trait TimerHandle {
    fn cancel(self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

pub struct Debouncer<H: TimerHandle> {
    generation: u64,
    pending: Option<(DebounceTicket, H)>,
}

impl<H: TimerHandle> Default for Debouncer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TimerHandle> Debouncer<H> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Cancel any pending timer and arm a new one via `arm`.
    pub fn schedule(&mut self, arm: impl FnOnce(DebounceTicket) -> H) {
        self.cancel();
        self.generation += 1;
        let ticket = DebounceTicket(self.generation);
        let handle = arm(ticket);
        self.pending = Some((ticket, handle));
    }

    /// Called by an elapsed timer. True only for the currently armed ticket;
    /// the slot is released without cancelling the (already finished) timer.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        match &self.pending {
            Some((armed, _)) if *armed == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: TimerHandle> Drop for Debouncer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
