use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error, warn};
use gloo_timers::future::TimeoutFuture;
use shared_types::{CorrectionResult, Tone};

use super::controller::EditorController;
use super::debounce::{TimerHandle, DEBOUNCE_DELAY_MS};
use super::session::{AnalysisTicket, OutputView, Reconciliation};
use crate::api::request_correction;
use crate::components::Header;
use crate::interop::copy_text_to_clipboard;

/// How long the "Copied" confirmation stays visible.
const COPIED_INDICATOR_MS: u32 = 2_000;

impl TimerHandle for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

type Controller = Signal<EditorController<Task>>;

/// Send the request and apply the response only if it is still the newest
/// one when it lands.
fn dispatch(mut controller: Controller, ticket: Option<AnalysisTicket>) {
    let Some(ticket) = ticket else {
        return;
    };

    spawn(async move {
        let token = ticket.token;
        let outcome = request_correction(&ticket.text, ticket.tone).await;
        if let Err(e) = &outcome {
            error!("Correction request {} failed: {}", token.value(), e);
        }

        let reconciliation = controller.write().complete(ticket, outcome);
        if reconciliation == Reconciliation::Stale {
            debug!("Dropped stale correction response {}", token.value());
        }
    });
}

fn handle_input(mut controller: Controller, text: String) {
    let mut timer_owner = controller;
    controller.write().input(text, move |ticket| {
        spawn(async move {
            TimeoutFuture::new(DEBOUNCE_DELAY_MS).await;
            let next = timer_owner.write().timer_elapsed(ticket);
            dispatch(timer_owner, next);
        })
    });
}

#[component]
pub fn Editor() -> Element {
    let mut controller = use_signal(|| EditorController::<Task>::new(Tone::default()));
    let mut copied = use_signal(|| false);

    use_drop(move || {
        controller.write().teardown();
    });

    let on_input = move |evt: FormEvent| handle_input(controller, evt.value());

    let on_tone_change = move |tone: Tone| {
        let next = controller.write().select_tone(tone);
        dispatch(controller, next);
    };

    let on_accept = move |_: MouseEvent| {
        controller.write().accept();
    };

    let on_copy = move |_: MouseEvent| {
        let text = controller
            .read()
            .session()
            .result()
            .map(|result| result.corrected_text.clone());
        let Some(text) = text else {
            return;
        };
        spawn(async move {
            match copy_text_to_clipboard(&text).await {
                Ok(()) => {
                    copied.set(true);
                    TimeoutFuture::new(COPIED_INDICATOR_MS).await;
                    copied.set(false);
                }
                Err(e) => warn!("Copy failed: {}", e),
            }
        });
    };

    let (draft, tone, char_label, analyzing, view) = {
        let guard = controller.read();
        let state = guard.session();
        (
            state.draft().to_string(),
            state.tone(),
            state.char_count_label(),
            state.is_analyzing(),
            state.output_view(),
        )
    };

    rsx! {
        style { {EDITOR_STYLES} }

        div {
            class: "app-shell",
            Header { current_tone: tone, on_tone_change: on_tone_change }

            main {
                class: "editor-grid",

                section {
                    class: "pane",
                    div {
                        class: "pane-header",
                        span { class: "pane-title", "Your Draft" }
                        if let Some(label) = char_label {
                            span { class: "char-count", "{label}" }
                        }
                    }
                    textarea {
                        class: "draft-input",
                        placeholder: "Start typing or paste your text here...",
                        value: "{draft}",
                        oninput: on_input,
                    }
                }

                section {
                    class: "pane",
                    div {
                        class: "pane-header",
                        span { class: "pane-title", "Polished" }
                        if analyzing {
                            span { class: "refining", "Refining..." }
                        }
                    }
                    div {
                        class: "output-body",
                        {match view {
                            OutputView::Placeholder => rsx! {
                                div {
                                    class: "output-placeholder",
                                    p { "Your polished text will appear here." }
                                }
                            },
                            OutputView::Error(message) => rsx! {
                                div { class: "output-error", "{message}" }
                            },
                            OutputView::Result(result) => rsx! {
                                CorrectionCard {
                                    result: result,
                                    copied: copied(),
                                    on_accept: on_accept,
                                    on_copy: on_copy,
                                }
                            },
                            OutputView::Skeleton => rsx! {
                                div {
                                    class: "skeleton",
                                    div { class: "skeleton-line" }
                                    div { class: "skeleton-line" }
                                    div { class: "skeleton-line short" }
                                }
                            },
                            OutputView::Waiting => rsx! {
                                div { class: "output-waiting", "Waiting for pause in typing..." }
                            },
                        }}
                    }
                }
            }
        }
    }
}

#[component]
fn CorrectionCard(
    result: CorrectionResult,
    copied: bool,
    on_accept: EventHandler<MouseEvent>,
    on_copy: EventHandler<MouseEvent>,
) -> Element {
    let summary_lines: Vec<String> = result
        .changes_summary
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*']).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    rsx! {
        div {
            class: "correction-card",
            p { class: "corrected-text", "{result.corrected_text}" }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |evt| on_copy.call(evt),
                    if copied { "Copied" } else { "Copy" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |evt| on_accept.call(evt),
                    "Use This"
                }
            }
            div {
                class: "summary",
                h3 { "Key Improvements" }
                ul {
                    for (i, line) in summary_lines.iter().enumerate() {
                        li { key: "{i}", "{line}" }
                    }
                }
            }
        }
    }
}

const EDITOR_STYLES: &str = r#"
.app-shell {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
    background: #0f172a;
    color: #f8fafc;
    font-family: system-ui, -apple-system, sans-serif;
}

.editor-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    flex: 1;
    padding: 1.5rem;
}

@media (max-width: 768px) {
    .editor-grid {
        grid-template-columns: 1fr;
    }
}

.pane {
    display: flex;
    flex-direction: column;
    background: #1e293b;
    border: 1px solid #334155;
    border-radius: 0.75rem;
    overflow: hidden;
}

.pane-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    border-bottom: 1px solid #334155;
    font-size: 0.875rem;
    color: #94a3b8;
}

.pane-title {
    font-weight: 600;
    color: #e2e8f0;
}

.refining {
    color: #818cf8;
    animation: pulse 1.5s ease-in-out infinite;
}

.draft-input {
    flex: 1;
    min-height: 320px;
    padding: 1rem;
    border: none;
    resize: none;
    background: transparent;
    color: inherit;
    font-size: 1rem;
    line-height: 1.6;
    outline: none;
}

.output-body {
    flex: 1;
    padding: 1rem;
    overflow-y: auto;
}

.output-placeholder,
.output-waiting {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
    color: #64748b;
    font-size: 0.875rem;
}

.output-error {
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid rgba(239, 68, 68, 0.4);
    color: #fca5a5;
}

.corrected-text {
    margin: 0 0 1rem;
    line-height: 1.6;
    white-space: pre-wrap;
}

.card-actions {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.btn {
    padding: 0.375rem 0.875rem;
    border-radius: 0.5rem;
    border: 1px solid transparent;
    font-size: 0.875rem;
    cursor: pointer;
}

.btn-primary {
    background: #4f46e5;
    color: white;
}

.btn-secondary {
    background: transparent;
    border-color: #334155;
    color: #e2e8f0;
}

.summary h3 {
    margin: 0 0 0.5rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #94a3b8;
}

.summary ul {
    margin: 0;
    padding-left: 1.25rem;
    color: #cbd5e1;
    font-size: 0.875rem;
}

.skeleton-line {
    height: 0.875rem;
    margin-bottom: 0.75rem;
    border-radius: 0.25rem;
    background: #334155;
    animation: pulse 1.5s ease-in-out infinite;
}

.skeleton-line.short {
    width: 60%;
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}
"#;
