//! Timing scenarios for the editor controller, driven on a paused
//! single-threaded tokio clock in place of the browser event loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use shared_types::{CorrectionResult, Tone};
use tokio::task::{spawn_local, JoinHandle, LocalSet};
use tokio::time::sleep;

use super::controller::EditorController;
use super::debounce::{TimerHandle, DEBOUNCE_DELAY_MS};
use super::session::{AnalysisTicket, OutputView};

impl TimerHandle for JoinHandle<()> {
    fn cancel(self) {
        self.abort();
    }
}

#[derive(Clone)]
struct Harness {
    controller: Rc<RefCell<EditorController<JoinHandle<()>>>>,
    calls: Rc<RefCell<Vec<(String, Tone)>>>,
    latencies_ms: Rc<RefCell<VecDeque<u64>>>,
}

impl Harness {
    fn new(tone: Tone, latencies_ms: &[u64]) -> Self {
        Self {
            controller: Rc::new(RefCell::new(EditorController::new(tone))),
            calls: Rc::default(),
            latencies_ms: Rc::new(RefCell::new(latencies_ms.iter().copied().collect())),
        }
    }

    fn type_text(&self, text: &str) {
        let harness = self.clone();
        self.controller.borrow_mut().input(text, move |ticket| {
            spawn_local(async move {
                sleep(Duration::from_millis(DEBOUNCE_DELAY_MS as u64)).await;
                let next = harness.controller.borrow_mut().timer_elapsed(ticket);
                harness.dispatch(next);
            })
        });
    }

    fn change_tone(&self, tone: Tone) {
        let next = self.controller.borrow_mut().select_tone(tone);
        self.dispatch(next);
    }

    fn teardown(&self) {
        self.controller.borrow_mut().teardown();
    }

    fn dispatch(&self, ticket: Option<AnalysisTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        self.calls
            .borrow_mut()
            .push((ticket.text.clone(), ticket.tone));
        let latency = self.latencies_ms.borrow_mut().pop_front().unwrap_or(100);

        let controller = self.controller.clone();
        spawn_local(async move {
            sleep(Duration::from_millis(latency)).await;
            let result = CorrectionResult {
                corrected_text: format!("corrected: {}", ticket.text),
                changes_summary: "- Fixed spelling".to_string(),
                tone: ticket.tone.to_string(),
            };
            controller.borrow_mut().complete(ticket, Ok(result));
        });
    }

    fn calls(&self) -> Vec<(String, Tone)> {
        self.calls.borrow().clone()
    }

    fn is_analyzing(&self) -> bool {
        self.controller.borrow().session().is_analyzing()
    }

    fn displayed_text(&self) -> Option<String> {
        self.controller
            .borrow()
            .session()
            .result()
            .map(|result| result.corrected_text.clone())
    }

    fn displayed_tone(&self) -> Option<String> {
        self.controller
            .borrow()
            .session()
            .result()
            .map(|result| result.tone.clone())
    }
}

async fn pause_ms(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn helo_wrld_dispatches_once_after_idle_delay() {
    LocalSet::new()
        .run_until(async {
            let harness = Harness::new(Tone::Casual, &[]);
            harness.type_text("helo wrld");

            pause_ms(DEBOUNCE_DELAY_MS as u64 - 50).await;
            assert!(harness.calls().is_empty());

            pause_ms(100).await;
            assert_eq!(harness.calls(), vec![("helo wrld".to_string(), Tone::Casual)]);
            assert!(harness.is_analyzing());

            pause_ms(200).await;
            assert!(!harness.is_analyzing());
            assert!(matches!(
                harness.controller.borrow().session().output_view(),
                OutputView::Result(_)
            ));
            assert_eq!(
                harness.displayed_text().as_deref(),
                Some("corrected: helo wrld")
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn rapid_edits_dispatch_final_text_only() {
    LocalSet::new()
        .run_until(async {
            let harness = Harness::new(Tone::Professional, &[]);
            for text in ["The qu", "The quick", "The quick brwn", "The quick brown fox"] {
                harness.type_text(text);
                pause_ms(150).await;
            }

            pause_ms(2_000).await;
            assert_eq!(
                harness.calls(),
                vec![("The quick brown fox".to_string(), Tone::Professional)]
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn three_char_typing_never_dispatches() {
    LocalSet::new()
        .run_until(async {
            let harness = Harness::new(Tone::Casual, &[]);
            for text in ["a", "ab", "abc"] {
                harness.type_text(text);
                pause_ms(100).await;
            }

            pause_ms(2_000).await;
            assert!(harness.calls().is_empty());
            assert!(!harness.controller.borrow().is_timer_pending());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn shrinking_below_threshold_cancels_pending_timer() {
    LocalSet::new()
        .run_until(async {
            let harness = Harness::new(Tone::Casual, &[]);
            harness.type_text("helo");
            pause_ms(300).await;
            harness.type_text("hel");

            pause_ms(2_000).await;
            assert!(harness.calls().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn slow_older_response_never_overwrites_newer() {
    LocalSet::new()
        .run_until(async {
            // A takes 2s, B takes 50ms
            let harness = Harness::new(Tone::Professional, &[2_000, 50]);
            harness.type_text("first text X");
            pause_ms(800).await;
            harness.type_text("second text Y");

            pause_ms(900).await;
            assert_eq!(harness.calls().len(), 2);
            assert_eq!(
                harness.displayed_text().as_deref(),
                Some("corrected: second text Y")
            );

            // A resolves now and must be dropped
            pause_ms(2_000).await;
            assert_eq!(
                harness.displayed_text().as_deref(),
                Some("corrected: second text Y")
            );
            assert!(!harness.is_analyzing());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn tone_change_dispatches_immediately_and_cancels_timer() {
    LocalSet::new()
        .run_until(async {
            let harness = Harness::new(Tone::Casual, &[]);
            harness.type_text("helo wrld");
            pause_ms(300).await;

            harness.change_tone(Tone::Academic);
            assert_eq!(
                harness.calls(),
                vec![("helo wrld".to_string(), Tone::Academic)]
            );

            pause_ms(2_000).await;
            assert_eq!(harness.calls().len(), 1);
            assert_eq!(harness.displayed_tone().as_deref(), Some("Academic"));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn tone_change_supersedes_in_flight_debounced_request() {
    LocalSet::new()
        .run_until(async {
            // debounced Casual call is slow, the re-toned call is fast
            let harness = Harness::new(Tone::Casual, &[1_500, 100]);
            harness.type_text("helo wrld");
            pause_ms(DEBOUNCE_DELAY_MS as u64 + 50).await;
            assert_eq!(harness.calls().len(), 1);

            harness.change_tone(Tone::Creative);
            pause_ms(3_000).await;

            assert_eq!(harness.calls().len(), 2);
            assert_eq!(harness.displayed_tone().as_deref(), Some("Creative"));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn retyping_accepted_text_makes_no_call() {
    LocalSet::new()
        .run_until(async {
            let harness = Harness::new(Tone::Casual, &[]);
            harness.type_text("helo wrld");
            pause_ms(1_500).await;
            assert_eq!(harness.calls().len(), 1);

            harness.type_text("helo wrl");
            pause_ms(100).await;
            harness.type_text("helo wrld");
            pause_ms(1_500).await;

            assert_eq!(harness.calls().len(), 1);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_pending_trigger() {
    LocalSet::new()
        .run_until(async {
            let harness = Harness::new(Tone::Casual, &[]);
            harness.type_text("helo wrld");
            pause_ms(200).await;
            harness.teardown();

            pause_ms(2_000).await;
            assert!(harness.calls().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn reverting_to_accepted_text_discards_in_flight_request() {
    LocalSet::new()
        .run_until(async {
            // the request for the edited text is slow
            let harness = Harness::new(Tone::Casual, &[100, 2_000]);
            harness.type_text("helo wrld");
            pause_ms(1_500).await;
            assert_eq!(harness.displayed_text().as_deref(), Some("corrected: helo wrld"));

            harness.type_text("helo wrld again");
            pause_ms(DEBOUNCE_DELAY_MS as u64 + 50).await;
            assert_eq!(harness.calls().len(), 2);

            harness.type_text("helo wrld");
            pause_ms(4_000).await;

            assert_eq!(harness.calls().len(), 2);
            assert_eq!(harness.displayed_text().as_deref(), Some("corrected: helo wrld"));
            assert!(!harness.is_analyzing());
        })
        .await;
}
