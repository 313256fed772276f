use dioxus::prelude::*;

use crate::context::{AppContext, SharedContentSignal};
use crate::vm::{looks_like_markdown, markdown_to_html};

/// Summary request form. Prefilled with whatever content the Home view
/// handed over.
#[component]
pub fn SummarizerView() -> Element {
    let ctx = use_context::<AppContext>();
    let shared = use_context::<SharedContentSignal>();
    let mut input_text = use_signal(|| shared.0.peek().text.clone());
    let mut custom_prompt = use_signal(String::new);
    let mut summary = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let summarize = move |_| {
        if loading() {
            return;
        }
        let summarizer = ctx.summarizer();
        spawn(async move {
            loading.set(true);
            let outcome = summarizer
                .summarize_with_prompt(&input_text(), &custom_prompt())
                .await;
            // Failures land in the same slot as the summary, shown as-is.
            match outcome {
                Ok(text) => summary.set(Some(text)),
                Err(err) => summary.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "page summarizer-page",
            h2 { class: "view-title", "Summarize Text or PDF" }
            div { class: "form-field",
                label { "Paste Text" }
                textarea {
                    rows: 5,
                    placeholder: "Paste or type your text here...",
                    value: "{input_text()}",
                    oninput: move |evt| input_text.set(evt.value()),
                }
            }
            div { class: "form-field",
                label {
                    "Custom Prompt "
                    span { class: "label-hint", "(optional)" }
                }
                input {
                    r#type: "text",
                    placeholder: "e.g. Summarize in bullet points",
                    value: "{custom_prompt()}",
                    oninput: move |evt| custom_prompt.set(evt.value()),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: loading(),
                onclick: summarize,
                if loading() { "Summarizing..." } else { "Summarize" }
            }
            if let Some(text) = summary() {
                div { class: "summary-result",
                    h3 { class: "summary-heading", "Summary:" }
                    if looks_like_markdown(&text) {
                        div {
                            class: "summary-body",
                            dangerous_inner_html: markdown_to_html(&text),
                        }
                    } else {
                        div { class: "summary-body", "{text}" }
                    }
                }
            }
        }
    }
}
