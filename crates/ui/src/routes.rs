use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::{AppContext, DarkModeSignal, SessionSignal};
use crate::views::{FlashcardsView, HomeView, SummarizerView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/summarizer", SummarizerView)] Summarizer {},
        #[route("/flashcards", FlashcardsView)] Flashcards {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionSignal>();
    let dark = use_context::<DarkModeSignal>();
    let mut logout_error = use_signal(|| None::<String>);
    let username = session
        .0
        .read()
        .as_ref()
        .map(|s| s.username.clone())
        .unwrap_or_default();
    let year = Utc::now().year();

    let preferences = ctx.preferences();
    let toggle_dark = move |_| {
        let preferences = preferences.clone();
        let mut dark = dark.0;
        let next = !dark();
        dark.set(next);
        spawn(async move {
            // Persisting is best-effort; the in-memory flag already flipped.
            let _ = preferences.set_dark_mode(next).await;
        });
    };

    let auth = ctx.auth();
    let flashcards = ctx.flashcards();
    let logout = move |_| {
        let auth = auth.clone();
        let flashcards = flashcards.clone();
        let mut session = session.0;
        spawn(async move {
            match perform_logout(&auth, &flashcards).await {
                Ok(()) => session.set(None),
                // Keep the session; clearing the signal with the stored
                // session intact would log the user back in on relaunch.
                Err(err) => logout_error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header-inner",
                    div {
                        h1 { class: "app-title", "AskEd AI Assistant" }
                        p { class: "app-tagline",
                            "Summarize, generate flashcards, and quizzes from your documents"
                        }
                    }
                    div { class: "app-header-actions",
                        span { class: "app-username", "{username}" }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: toggle_dark,
                            if (dark.0)() { "☀️ Light" } else { "🌙 Dark" }
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: logout,
                            "Logout"
                        }
                    }
                }
                nav { class: "app-tabs",
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::Summarizer {}, "Summarizer" }
                    Link { to: Route::Flashcards {}, "Flashcards" }
                }
                if let Some(message) = logout_error() {
                    div { class: "form-error", "{message}" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "app-footer",
                "© {year} AskEd AI. All rights reserved."
            }
        }
    }
}

/// Drop the in-memory generated sets, then destroy the persisted
/// session. The session error propagates so the caller can tell the
/// user the stored session is still on disk.
async fn perform_logout(
    auth: &services::AuthService,
    flashcards: &services::FlashcardService,
) -> Result<(), services::AuthError> {
    let _ = flashcards.clear_generated();
    auth.logout().await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use asked_core::model::{AuthSession, Flashcard};
    use asked_core::time::fixed_clock;
    use async_trait::async_trait;
    use services::{AuthService, FlashcardService};
    use storage::repository::{SessionRepository, StorageError};

    use super::perform_logout;
    use crate::views::test_harness::ScriptedBackend;

    /// Session store whose delete always fails, as if the database file
    /// went away mid-session.
    struct BrokenSessionStore;

    #[async_trait]
    impl SessionRepository for BrokenSessionStore {
        async fn get_session(&self) -> Result<Option<AuthSession>, StorageError> {
            Ok(Some(AuthSession::new("token-1", "alice")))
        }

        async fn save_session(&self, _session: &AuthSession) -> Result<(), StorageError> {
            Ok(())
        }

        async fn clear_session(&self) -> Result<(), StorageError> {
            Err(StorageError::Connection("database is locked".into()))
        }
    }

    #[tokio::test]
    async fn failed_session_clear_surfaces_instead_of_vanishing() {
        let backend = Arc::new(ScriptedBackend {
            generated: vec![Flashcard::new("What is mitosis?", "Cell division")],
            ..ScriptedBackend::default()
        });
        let sessions: Arc<dyn SessionRepository> = Arc::new(BrokenSessionStore);
        let auth = AuthService::new(backend.clone(), Arc::clone(&sessions));
        let flashcards = FlashcardService::new(backend, fixed_clock());
        flashcards
            .generate_from_text("Cells divide by mitosis.")
            .await
            .expect("generate");

        let err = perform_logout(&auth, &flashcards)
            .await
            .expect_err("clear should fail");

        assert_eq!(err.to_string(), "connection error: database is locked");
        // The generated cache is gone either way; the stored session is not.
        assert!(flashcards.generated_sets().expect("sets").is_empty());
        assert!(sessions.get_session().await.expect("get").is_some());
    }
}
