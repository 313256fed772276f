use std::sync::Arc;

use asked_core::model::AuthSession;
use services::{
    AuthService, DocumentService, FlashcardService, PreferencesService, SummarizerService,
};

/// What the composition root (or a test harness) must supply to the UI.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn summarizer(&self) -> Arc<SummarizerService>;
    fn flashcards(&self) -> Arc<FlashcardService>;
    fn documents(&self) -> Arc<DocumentService>;
    fn preferences(&self) -> Arc<PreferencesService>;

    /// Session restored from the local store at startup, if any.
    fn initial_session(&self) -> Option<AuthSession>;

    /// Persisted dark-mode flag at startup.
    fn initial_dark_mode(&self) -> bool;
}

/// Service handles and startup state, shared with every view through
/// Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    summarizer: Arc<SummarizerService>,
    flashcards: Arc<FlashcardService>,
    documents: Arc<DocumentService>,
    preferences: Arc<PreferencesService>,
    initial_session: Option<AuthSession>,
    initial_dark_mode: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            summarizer: app.summarizer(),
            flashcards: app.flashcards(),
            documents: app.documents(),
            preferences: app.preferences(),
            initial_session: app.initial_session(),
            initial_dark_mode: app.initial_dark_mode(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn summarizer(&self) -> Arc<SummarizerService> {
        Arc::clone(&self.summarizer)
    }

    #[must_use]
    pub fn flashcards(&self) -> Arc<FlashcardService> {
        Arc::clone(&self.flashcards)
    }

    #[must_use]
    pub fn documents(&self) -> Arc<DocumentService> {
        Arc::clone(&self.documents)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    #[must_use]
    pub fn initial_session(&self) -> Option<AuthSession> {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn initial_dark_mode(&self) -> bool {
        self.initial_dark_mode
    }
}

/// Ephemeral content handed from Home to the Summarizer and Flashcards
/// views. Not a store: it only survives in-app navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedContent {
    pub text: String,
    pub filename: Option<String>,
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Signed-in session, shared by the auth gate and the layout chrome.
#[derive(Clone, Copy)]
pub struct SessionSignal(pub dioxus::prelude::Signal<Option<AuthSession>>);

/// Dark-mode flag mirrored into the root element's class list.
#[derive(Clone, Copy)]
pub struct DarkModeSignal(pub dioxus::prelude::Signal<bool>);

/// Content handed between views, see [`SharedContent`].
#[derive(Clone, Copy)]
pub struct SharedContentSignal(pub dioxus::prelude::Signal<SharedContent>);
