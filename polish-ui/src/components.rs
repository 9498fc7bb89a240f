use dioxus::prelude::*;
use shared_types::Tone;

#[component]
pub fn Header(current_tone: Tone, on_tone_change: EventHandler<Tone>) -> Element {
    rsx! {
        style { {HEADER_STYLES} }

        header {
            class: "app-header",
            div {
                class: "brand",
                span { class: "brand-mark", "P" }
                span { class: "brand-name", "ProsePolish" }
            }
            label {
                class: "tone-picker",
                span { "Tone" }
                select {
                    class: "tone-select",
                    value: current_tone.as_str(),
                    onchange: move |evt: FormEvent| {
                        match evt.value().parse::<Tone>() {
                            Ok(tone) => on_tone_change.call(tone),
                            Err(e) => dioxus_logger::tracing::warn!("ignoring tone selection: {}", e),
                        }
                    },
                    for tone in Tone::ALL {
                        option {
                            key: "{tone}",
                            value: tone.as_str(),
                            selected: tone == current_tone,
                            "{tone}"
                        }
                    }
                }
            }
        }
    }
}

const HEADER_STYLES: &str = r#"
.app-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1.5rem;
    background: #1e293b;
    border-bottom: 1px solid #334155;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
}

.brand-mark {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 1.75rem;
    height: 1.75rem;
    border-radius: 0.5rem;
    background: #4f46e5;
    color: white;
}

.tone-picker {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: #94a3b8;
}

.tone-select {
    padding: 0.375rem 0.75rem;
    border-radius: 0.5rem;
    border: 1px solid #334155;
    background: #0f172a;
    color: #f8fafc;
}
"#;
