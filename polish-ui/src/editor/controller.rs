//! Routes editor events through the session and its debounce timer
//!
//! Timer spawning and request dispatch stay with the caller: `input` takes the
//! closure that arms a timer, and every method that may start an analysis
//! hands back the ticket to send.

use shared_types::{CorrectionResult, Tone};

use super::debounce::{DebounceTicket, Debouncer, TimerHandle};
use super::session::{AnalysisTicket, EditOutcome, EditorSession, Reconciliation};

pub struct EditorController<H: TimerHandle> {
    session: EditorSession,
    debouncer: Debouncer<H>,
}

impl<H: TimerHandle> EditorController<H> {
    pub fn new(tone: Tone) -> Self {
        Self {
            session: EditorSession::new(tone),
            debouncer: Debouncer::new(),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn is_timer_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Record a keystroke and cancel or re-arm the debounce timer.
    pub fn input(&mut self, text: impl Into<String>, arm: impl FnOnce(DebounceTicket) -> H) {
        match self.session.edit(text) {
            EditOutcome::Cleared => self.debouncer.cancel(),
            EditOutcome::ScheduleAnalysis => self.debouncer.schedule(arm),
        }
    }

    /// Tone changes skip the idle delay.
    pub fn select_tone(&mut self, tone: Tone) -> Option<AnalysisTicket> {
        if !self.session.change_tone(tone) {
            return None;
        }
        self.debouncer.cancel();
        self.session.begin_draft_analysis()
    }

    /// Called by an elapsed timer; `None` when the timer was superseded or
    /// the draft needs no request.
    pub fn timer_elapsed(&mut self, ticket: DebounceTicket) -> Option<AnalysisTicket> {
        if !self.debouncer.fire(ticket) {
            return None;
        }
        self.session.begin_draft_analysis()
    }

    pub fn complete(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<CorrectionResult, String>,
    ) -> Reconciliation {
        self.session.complete(ticket, outcome)
    }

    /// Replace the draft with the displayed correction. Returns false when
    /// there is nothing to accept.
    pub fn accept(&mut self) -> bool {
        let accepted = self.session.accept_correction().is_some();
        if accepted {
            self.debouncer.cancel();
        }
        accepted
    }

    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}
