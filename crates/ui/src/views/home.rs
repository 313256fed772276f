use std::path::Path;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, SharedContent, SharedContentSignal};
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputMethod {
    Text,
    Pdf,
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "toggle-button toggle-button--active"
    } else {
        "toggle-button"
    }
}

/// Landing view. Collects text or a PDF and hands the content to the
/// Summarizer or Flashcards view.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let shared = use_context::<SharedContentSignal>();
    let navigator = use_navigator();
    let mut method = use_signal(|| InputMethod::Text);
    let mut text_content = use_signal(String::new);
    let mut pdf_path = use_signal(String::new);
    let mut uploaded_filename = use_signal(|| None::<String>);
    let mut extracted_text = use_signal(String::new);
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let content_for_processing = move || -> String {
        match method() {
            InputMethod::Text => text_content(),
            InputMethod::Pdf => {
                let extracted = extracted_text();
                if extracted.trim().is_empty() {
                    text_content()
                } else {
                    extracted
                }
            }
        }
    };

    let upload = move |_| {
        let path = pdf_path();
        let path = path.trim().to_string();
        if path.is_empty() || uploading() {
            return;
        }
        let documents = ctx.documents();
        spawn(async move {
            uploading.set(true);
            error.set(None);
            let filename = Path::new(&path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            match std::fs::read(&path) {
                Ok(bytes) => match documents.upload_and_extract(&filename, bytes).await {
                    Ok(text) => {
                        uploaded_filename.set(Some(filename));
                        extracted_text.set(text);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                },
                Err(_) => error.set(Some("Failed to upload PDF".to_string())),
            }
            uploading.set(false);
        });
    };

    let go = move |route: Route| {
        let content = content_for_processing();
        if content.trim().is_empty() {
            error.set(Some("Please provide text content or upload a PDF".to_string()));
            return;
        }
        let filename = match method() {
            InputMethod::Pdf => uploaded_filename(),
            InputMethod::Text => None,
        };
        let mut shared = shared.0;
        shared.set(SharedContent {
            text: content,
            filename,
        });
        let _ = navigator.push(route);
    };

    let preview = {
        let extracted = extracted_text();
        let trimmed = extracted.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.chars().take(200).collect::<String>())
        }
    };

    rsx! {
        div { class: "page home-page",
            h2 { class: "view-title", "Welcome to AskEd AI" }
            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }
            div { class: "method-toggle",
                button {
                    class: "{toggle_class(method() == InputMethod::Text)}",
                    r#type: "button",
                    onclick: move |_| method.set(InputMethod::Text),
                    "Add Text"
                }
                button {
                    class: "{toggle_class(method() == InputMethod::Pdf)}",
                    r#type: "button",
                    onclick: move |_| method.set(InputMethod::Pdf),
                    "Upload PDF"
                }
            }
            if method() == InputMethod::Text {
                div { class: "form-field",
                    label { "Text Content" }
                    textarea {
                        rows: 6,
                        placeholder: "Paste or type your text here...",
                        value: "{text_content()}",
                        oninput: move |evt| text_content.set(evt.value()),
                    }
                }
            } else {
                div { class: "form-field",
                    label { "Upload PDF" }
                    input {
                        r#type: "text",
                        placeholder: "Path to your PDF (e.g. /home/me/notes.pdf)",
                        value: "{pdf_path()}",
                        oninput: move |evt| pdf_path.set(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: uploading(),
                        onclick: upload,
                        if uploading() { "Uploading..." } else { "Upload PDF" }
                    }
                    if let Some(name) = uploaded_filename() {
                        div { class: "upload-status", "✓ PDF uploaded: {name}" }
                    }
                    if let Some(snippet) = preview {
                        div { class: "form-field",
                            label { "Extracted Text" }
                            div { class: "extract-preview", "{snippet}..." }
                        }
                    }
                }
            }
            div { class: "home-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| go(Route::Summarizer {}),
                    "📝 Generate Summary"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| go(Route::Flashcards {}),
                    "🎯 Generate Flashcards"
                }
            }
            p { class: "view-hint", "Choose your preferred action based on the content you've provided" }
        }
    }
}
