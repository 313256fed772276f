use asked_core::model::{CardId, Flashcard, SetId};
use dioxus::prelude::*;

use crate::context::{AppContext, SessionSignal, SharedContentSignal};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FolderVm, GeneratedSetVm, PracticeCursor, map_folder, map_generated_set};

#[derive(Clone, Debug, PartialEq)]
struct PracticeRun {
    cards: Vec<Flashcard>,
    cursor: PracticeCursor,
}

impl PracticeRun {
    fn new(cards: Vec<Flashcard>) -> Self {
        let cursor = PracticeCursor::new(cards.len());
        Self { cards, cursor }
    }

    fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.cursor.index())
    }
}

/// Flashcard generation, the saved library, and practice mode.
#[component]
pub fn FlashcardsView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionSignal>();
    let shared = use_context::<SharedContentSignal>();
    let mut input_text = use_signal(|| shared.0.peek().text.clone());
    let mut filename = use_signal(|| shared.0.peek().filename.clone().unwrap_or_default());
    let mut generated = use_signal(Vec::<GeneratedSetVm>::new);
    let mut generation_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    let mut practice = use_signal(|| None::<PracticeRun>);
    let mut save_target = use_signal(|| None::<SetId>);
    let mut folder_name = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut library_error = use_signal(|| None::<String>);

    // Pick up sets generated during an earlier visit to this view.
    use_hook(|| refresh_generated(&ctx.flashcards(), generated, generation_error));

    let flashcards_for_library = ctx.flashcards();
    let library = use_resource(move || {
        let flashcards = flashcards_for_library.clone();
        let token = session.0.read().as_ref().map(|s| s.token.clone());
        async move {
            let Some(token) = token else {
                return Ok::<_, ViewError>(Vec::new());
            };
            let folders = flashcards
                .list_saved(&token)
                .await
                .map_err(|err| ViewError::from_error(&err))?;
            Ok(folders.iter().map(map_folder).collect::<Vec<FolderVm>>())
        }
    });
    let library_state = view_state_from_resource(&library);

    let generate_from_text = {
        let flashcards = ctx.flashcards();
        move |_| {
            if loading() {
                return;
            }
            let flashcards = flashcards.clone();
            spawn(async move {
                loading.set(true);
                generation_error.set(None);
                match flashcards.generate_from_text(&input_text()).await {
                    Ok(_) => refresh_generated(&flashcards, generated, generation_error),
                    Err(err) => generation_error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
    };

    let fetch_from_file = {
        let flashcards = ctx.flashcards();
        move |_| {
            let name = filename();
            let name = name.trim().to_string();
            if name.is_empty() || loading() {
                return;
            }
            let flashcards = flashcards.clone();
            spawn(async move {
                loading.set(true);
                generation_error.set(None);
                match flashcards.generate_from_file(&name).await {
                    Ok(_) => refresh_generated(&flashcards, generated, generation_error),
                    Err(err) => generation_error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        div { class: "page flashcards-page",
            h2 { class: "view-title", "Flashcards" }
            if let Some(message) = generation_error() {
                div { class: "form-error", "{message}" }
            }

            div { class: "form-field",
                label { "Text Content" }
                textarea {
                    rows: 5,
                    placeholder: "Paste or type your text here...",
                    value: "{input_text()}",
                    oninput: move |evt| input_text.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: loading(),
                    onclick: generate_from_text,
                    if loading() { "Loading..." } else { "Generate Flashcards" }
                }
            }

            div { class: "form-field",
                label { "PDF Filename" }
                input {
                    r#type: "text",
                    placeholder: "Enter filename (e.g. file.pdf)",
                    value: "{filename()}",
                    oninput: move |evt| filename.set(evt.value()),
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: loading() || filename().trim().is_empty(),
                    onclick: fetch_from_file,
                    if loading() { "Loading..." } else { "Fetch Flashcards" }
                }
            }

            if !generated().is_empty() {
                section { class: "generated-sets",
                    h3 { class: "section-title", "Flashcards:" }
                    for set in generated() {
                        GeneratedSetCard {
                            set: set.clone(),
                            on_practice: move |cards: Vec<Flashcard>| {
                                practice.set(Some(PracticeRun::new(cards)));
                            },
                            on_save: move |id: SetId| {
                                folder_name.set(String::new());
                                save_target.set(Some(id));
                            },
                            on_discard: {
                                let flashcards = ctx.flashcards();
                                move |id: SetId| {
                                    match flashcards.discard_set(id) {
                                        Ok(_) => refresh_generated(&flashcards, generated, generation_error),
                                        Err(err) => generation_error.set(Some(err.to_string())),
                                    }
                                }
                            },
                        }
                    }
                }
            }

            section { class: "saved-library",
                h3 { class: "section-title", "Saved Flashcards" }
                if let Some(message) = library_error() {
                    div { class: "form-error", "{message}" }
                }
                match library_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "form-error", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut library = library;
                                library.restart();
                            },
                            "Retry"
                        }
                    },
                    ViewState::Ready(folders) => rsx! {
                        if folders.is_empty() {
                            p { class: "library-empty", "No saved flashcards yet." }
                        } else {
                            for folder in folders {
                                FolderCard {
                                    folder: folder.clone(),
                                    on_practice: move |cards: Vec<Flashcard>| {
                                        practice.set(Some(PracticeRun::new(cards)));
                                    },
                                    on_delete_card: {
                                        let flashcards = ctx.flashcards();
                                        move |id: CardId| {
                                            let flashcards = flashcards.clone();
                                            let token = session.0.read().as_ref().map(|s| s.token.clone());
                                            spawn(async move {
                                                let Some(token) = token else { return };
                                                match flashcards.delete_card(&token, id).await {
                                                    Ok(()) => {
                                                        library_error.set(None);
                                                        let mut library = library;
                                                        library.restart();
                                                    }
                                                    Err(err) => library_error.set(Some(err.to_string())),
                                                }
                                            });
                                        }
                                    },
                                    on_delete_folder: {
                                        let flashcards = ctx.flashcards();
                                        move |name: String| {
                                            let flashcards = flashcards.clone();
                                            let token = session.0.read().as_ref().map(|s| s.token.clone());
                                            spawn(async move {
                                                let Some(token) = token else { return };
                                                match flashcards.delete_folder(&token, &name).await {
                                                    Ok(_) => {
                                                        library_error.set(None);
                                                        let mut library = library;
                                                        library.restart();
                                                    }
                                                    Err(err) => library_error.set(Some(err.to_string())),
                                                }
                                            });
                                        }
                                    },
                                }
                            }
                        }
                    },
                }
            }

            if let Some(run) = practice() {
                PracticeModal {
                    run: run.clone(),
                    on_update: move |next: PracticeRun| practice.set(Some(next)),
                    on_exit: move |_| practice.set(None),
                }
            }

            if let Some(set_id) = save_target() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| save_target.set(None),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Save to folder" }
                        div { class: "form-field",
                            label { "Folder name" }
                            input {
                                r#type: "text",
                                placeholder: "e.g. Biology",
                                value: "{folder_name()}",
                                oninput: move |evt| folder_name.set(evt.value()),
                            }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| save_target.set(None),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: saving(),
                                onclick: {
                                    let flashcards = ctx.flashcards();
                                    move |_| {
                                        let flashcards = flashcards.clone();
                                        let token = session.0.read().as_ref().map(|s| s.token.clone());
                                        let cards = generated()
                                            .iter()
                                            .find(|set| set.id == set_id)
                                            .map(|set| set.cards.clone())
                                            .unwrap_or_default();
                                        spawn(async move {
                                            let Some(token) = token else { return };
                                            saving.set(true);
                                            let folder = folder_name();
                                            let folder = folder.trim().to_string();
                                            let folder = if folder.is_empty() { None } else { Some(folder) };
                                            match flashcards.save_set(&token, cards, folder.as_deref()).await {
                                                Ok(_) => {
                                                    save_target.set(None);
                                                    library_error.set(None);
                                                    let mut library = library;
                                                    library.restart();
                                                }
                                                Err(err) => library_error.set(Some(err.to_string())),
                                            }
                                            saving.set(false);
                                        });
                                    }
                                },
                                if saving() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Re-reads the in-memory generated collection and mirrors it into the
/// view's signal, newest set first.
fn refresh_generated(
    flashcards: &services::FlashcardService,
    mut generated: Signal<Vec<GeneratedSetVm>>,
    mut generation_error: Signal<Option<String>>,
) {
    match flashcards.generated_sets() {
        Ok(sets) => generated.set(sets.iter().map(map_generated_set).collect()),
        Err(err) => generation_error.set(Some(err.to_string())),
    }
}

#[component]
fn GeneratedSetCard(
    set: GeneratedSetVm,
    on_practice: EventHandler<Vec<Flashcard>>,
    on_save: EventHandler<SetId>,
    on_discard: EventHandler<SetId>,
) -> Element {
    let set_id = set.id;
    let cards_for_practice = set.cards.clone();
    rsx! {
        div { class: "set-card",
            div { class: "set-card-header",
                span { class: "set-card-meta", "{set.created_label} · {set.count_label}" }
                div { class: "set-card-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_practice.call(cards_for_practice.clone()),
                        "Practice"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_save.call(set_id),
                        "Save"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_discard.call(set_id),
                        "Delete"
                    }
                }
            }
            ul { class: "card-list",
                for card in set.cards.iter() {
                    li { class: "card-row",
                        p { class: "card-question", "Q: {card.question}" }
                        p { class: "card-answer", "A: {card.answer}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FolderCard(
    folder: FolderVm,
    on_practice: EventHandler<Vec<Flashcard>>,
    on_delete_card: EventHandler<CardId>,
    on_delete_folder: EventHandler<String>,
) -> Element {
    let cards_for_practice = folder.cards.clone();
    let folder_for_delete = folder.name.clone();
    rsx! {
        div { class: "folder-card",
            div { class: "folder-header",
                h4 { class: "folder-name", "{folder.name}" }
                span { class: "folder-count", "{folder.count_label}" }
                div { class: "folder-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_practice.call(cards_for_practice.clone()),
                        "Practice"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_delete_folder.call(folder_for_delete.clone()),
                        "Delete Folder"
                    }
                }
            }
            ul { class: "card-list",
                for card in folder.cards.iter() {
                    li { class: "card-row",
                        p { class: "card-question", "Q: {card.question}" }
                        p { class: "card-answer", "A: {card.answer}" }
                        if let Some(id) = card.id {
                            button {
                                class: "btn btn-danger card-delete",
                                r#type: "button",
                                onclick: move |_| on_delete_card.call(id),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PracticeModalProps {
    run: PracticeRun,
    on_update: EventHandler<PracticeRun>,
    on_exit: EventHandler<()>,
}

#[component]
fn PracticeModal(props: PracticeModalProps) -> Element {
    let run = props.run.clone();
    let position = run.cursor.position_label();
    let at_start = run.cursor.at_start();
    let at_end = run.cursor.at_end();
    let show_answer = run.cursor.show_answer();
    let card_class = if show_answer {
        "practice-card practice-card--answer"
    } else {
        "practice-card"
    };
    let face = run.current().map(|card| {
        if show_answer {
            card.answer.clone()
        } else {
            card.question.clone()
        }
    });

    let flip_run = run.clone();
    let next_run = run.clone();
    let previous_run = run;
    let on_update = props.on_update;
    let on_exit = props.on_exit;

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal practice-modal",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "practice-header",
                    span { class: "practice-position", "{position}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_exit.call(()),
                        "Exit Practice"
                    }
                }
                match face {
                    Some(text) => rsx! {
                        div { class: "{card_class}",
                            p { "{text}" }
                        }
                    },
                    None => rsx! {
                        div { class: "practice-card", p { "No cards to practice." } }
                    },
                }
                div { class: "practice-controls",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: at_start,
                        onclick: move |_| {
                            let mut next = previous_run.clone();
                            next.cursor.previous();
                            on_update.call(next);
                        },
                        "Previous"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut next = flip_run.clone();
                            next.cursor.flip();
                            on_update.call(next);
                        },
                        if show_answer { "Show Question" } else { "Show Answer" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: at_end,
                        onclick: move |_| {
                            let mut next = next_run.clone();
                            next.cursor.next();
                            on_update.call(next);
                        },
                        "Next"
                    }
                }
            }
        }
    }
}
