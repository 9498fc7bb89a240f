//! Editor session state, no RSX and no signals
//!
//! Holds the draft, the selected tone, the request token counter and the last
//! accepted correction. Every completion is reconciled against the token that
//! was current when its request was issued; anything older is dropped.

use shared_types::{exceeds_min_length, CorrectionResult, Tone};

pub const ANALYZE_ERROR_MESSAGE: &str = "Could not analyze text. Please try again.";

/// Identifies one dispatched correction request. Strictly increasing per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Everything a dispatched request needs, captured at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub token: RequestToken,
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Draft too short; displayed result cleared, nothing to schedule.
    Cleared,
    /// Draft long enough; (re)start the debounce timer.
    ScheduleAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Applied,
    Failed,
    /// A newer request was issued after this one; outcome discarded.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Analyzing,
    Resolved,
    Failed,
}

/// What the output pane should show, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputView {
    Placeholder,
    Error(String),
    Result(CorrectionResult),
    Skeleton,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AcceptedCorrection {
    text: String,
    tone: Tone,
    result: CorrectionResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSession {
    draft: String,
    tone: Tone,
    token: RequestToken,
    analyzing: bool,
    accepted: Option<AcceptedCorrection>,
    error: Option<String>,
}

impl EditorSession {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            ..Default::default()
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn current_token(&self) -> RequestToken {
        self.token
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn result(&self) -> Option<&CorrectionResult> {
        self.accepted.as_ref().map(|accepted| &accepted.result)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn char_count(&self) -> usize {
        self.draft.chars().count()
    }

    /// Counter text for the input pane; hidden while the draft is empty.
    pub fn char_count_label(&self) -> Option<String> {
        let count = self.char_count();
        (count > 0).then(|| format!("{count} chars"))
    }

    pub fn phase(&self) -> AnalysisPhase {
        if self.analyzing {
            AnalysisPhase::Analyzing
        } else if self.error.is_some() {
            AnalysisPhase::Failed
        } else if self.accepted.is_some() {
            AnalysisPhase::Resolved
        } else {
            AnalysisPhase::Idle
        }
    }

    /// Record a keystroke. The caller owns the debounce timer and must cancel
    /// it on `Cleared` and reschedule it on `ScheduleAnalysis`.
    pub fn edit(&mut self, text: impl Into<String>) -> EditOutcome {
        self.draft = text.into();
        if exceeds_min_length(&self.draft) {
            return EditOutcome::ScheduleAnalysis;
        }
        self.clear_output();
        EditOutcome::Cleared
    }

    /// Switch tone. Returns true when the draft should be analyzed right away.
    pub fn change_tone(&mut self, tone: Tone) -> bool {
        self.tone = tone;
        exceeds_min_length(&self.draft)
    }

    /// Start a request for the current draft and tone.
    pub fn begin_draft_analysis(&mut self) -> Option<AnalysisTicket> {
        let text = self.draft.clone();
        self.begin_analysis(text, self.tone)
    }

    /// Issue a new token for `(text, tone)` and mark the session analyzing.
    ///
    /// Returns `None` when the text is too short, or when the pair matches
    /// the correction already on display. In the latter case any request
    /// still in flight is superseded so it cannot replace that correction.
    pub fn begin_analysis(&mut self, text: impl Into<String>, tone: Tone) -> Option<AnalysisTicket> {
        let text = text.into();
        if !exceeds_min_length(&text) {
            return None;
        }
        if let Some(accepted) = &self.accepted {
            if accepted.text == text && accepted.tone == tone {
                self.supersede_in_flight();
                return None;
            }
        }

        let token = self.advance_token();
        self.analyzing = true;
        self.error = None;
        Some(AnalysisTicket { token, text, tone })
    }

    /// Apply a finished request if it is still the most recent one.
    pub fn complete(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<CorrectionResult, String>,
    ) -> Reconciliation {
        if ticket.token != self.token {
            return Reconciliation::Stale;
        }

        self.analyzing = false;
        match outcome {
            Ok(result) => {
                self.accepted = Some(AcceptedCorrection {
                    text: ticket.text,
                    tone: ticket.tone,
                    result,
                });
                Reconciliation::Applied
            }
            Err(_) => {
                self.error = Some(ANALYZE_ERROR_MESSAGE.to_string());
                Reconciliation::Failed
            }
        }
    }

    /// Replace the draft with the displayed correction.
    ///
    /// The corrected text becomes the last analyzed text, so the same
    /// (text, tone) pair will not be re-sent. In-flight requests for the old
    /// draft are superseded. The caller cancels any pending debounce timer.
    pub fn accept_correction(&mut self) -> Option<&str> {
        let accepted = self.accepted.as_mut()?;
        accepted.text = accepted.result.corrected_text.clone();
        self.draft = accepted.text.clone();
        self.error = None;
        self.supersede_in_flight();
        Some(&self.draft)
    }

    pub fn output_view(&self) -> OutputView {
        if self.draft.trim().is_empty() {
            OutputView::Placeholder
        } else if let Some(message) = &self.error {
            OutputView::Error(message.clone())
        } else if let Some(result) = self.result() {
            OutputView::Result(result.clone())
        } else if self.analyzing {
            OutputView::Skeleton
        } else {
            OutputView::Waiting
        }
    }

    fn clear_output(&mut self) {
        self.accepted = None;
        self.error = None;
        self.supersede_in_flight();
    }

    fn supersede_in_flight(&mut self) {
        if self.analyzing {
            self.advance_token();
            self.analyzing = false;
        }
    }

    fn advance_token(&mut self) -> RequestToken {
        self.token = RequestToken(self.token.0 + 1);
        self.token
    }
}
