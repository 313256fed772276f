use asked_core::model::Flashcard;

use crate::context::SharedContent;

use super::test_harness::{ScriptedBackend, ViewKind, setup_view_harness, setup_view_harness_with_shared};

#[tokio::test(flavor = "current_thread")]
async fn auth_view_smoke_renders_login_form() {
    let mut harness = setup_view_harness(ViewKind::Auth, ScriptedBackend::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Login"), "missing title in {html}");
    assert!(html.contains("Username"), "missing username field in {html}");
    assert!(html.contains("Register here"), "missing switch link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_input_choices() {
    let mut harness = setup_view_harness(ViewKind::Home, ScriptedBackend::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to AskEd AI"), "missing title in {html}");
    assert!(html.contains("Add Text"), "missing text toggle in {html}");
    assert!(html.contains("Upload PDF"), "missing pdf toggle in {html}");
    assert!(html.contains("Generate Summary"), "missing action in {html}");
    assert!(html.contains("Generate Flashcards"), "missing action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summarizer_view_smoke_prefills_shared_content() {
    let shared = SharedContent {
        text: "Photosynthesis converts light into chemical energy.".to_string(),
        filename: None,
    };
    let mut harness = setup_view_harness_with_shared(
        ViewKind::Summarizer,
        ScriptedBackend::default(),
        shared,
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Summarize Text or PDF"), "missing title in {html}");
    assert!(
        html.contains("Photosynthesis converts light into chemical energy."),
        "missing prefilled text in {html}"
    );
    assert!(html.contains("Custom Prompt"), "missing prompt field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_smoke_renders_saved_folders_with_unsorted_last() {
    let backend = ScriptedBackend::default();
    {
        let mut saved = backend.saved.lock().unwrap();
        saved.push(Flashcard::new("What is a cell?", "The basic unit of life").in_folder("Biology"));
        saved.push(Flashcard::new("What is osmosis?", "Diffusion of water").in_folder("Biology"));
        saved.push(Flashcard::new("Loose card?", "No folder"));
    }
    let mut harness = setup_view_harness(ViewKind::Flashcards, backend);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Biology"), "missing folder in {html}");
    assert!(html.contains("2 cards"), "missing count in {html}");
    assert!(html.contains("Q: What is a cell?"), "missing question in {html}");
    assert!(html.contains("Delete Folder"), "missing folder action in {html}");

    let biology = html.find("Biology").unwrap();
    let unsorted = html.find("Unsorted").unwrap();
    assert!(biology < unsorted, "Unsorted should sort last in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_smoke_renders_generated_sets() {
    let backend = ScriptedBackend {
        generated: vec![Flashcard::new("What is mitosis?", "Cell division")],
        ..ScriptedBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Flashcards, backend);
    harness
        .services
        .flashcards()
        .generate_from_text("Cells divide by mitosis.")
        .await
        .expect("generate");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Flashcards:"), "missing section in {html}");
    assert!(html.contains("Q: What is mitosis?"), "missing question in {html}");
    assert!(html.contains("A: Cell division"), "missing answer in {html}");
    assert!(html.contains("Practice"), "missing practice action in {html}");
    assert!(html.contains("1 card"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_smoke_renders_library_error() {
    let backend = ScriptedBackend {
        fail: true,
        ..ScriptedBackend::default()
    };
    let mut harness = setup_view_harness(ViewKind::Flashcards, backend);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("Failed to load saved flashcards"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
