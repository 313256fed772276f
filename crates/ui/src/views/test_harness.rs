use std::sync::{Arc, Mutex};

use asked_core::model::{AuthSession, CardId, Flashcard};
use asked_core::time::fixed_clock;
use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, AuthService, BackendApi, BackendError, DocumentService, FlashcardService,
    LoginRequest, PreferencesService, RegisterRequest, SummarizerService,
};
use storage::repository::Storage;

use crate::context::{
    DarkModeSignal, SessionSignal, SharedContent, SharedContentSignal, UiApp, build_app_context,
};
use crate::views::{AuthView, FlashcardsView, HomeView, SummarizerView};

/// Backend fake with canned responses. Every call succeeds unless `fail`
/// is set, in which case everything returns a 500.
#[derive(Default)]
pub struct ScriptedBackend {
    pub summary: String,
    pub generated: Vec<Flashcard>,
    pub saved: Mutex<Vec<Flashcard>>,
    pub extracted: String,
    pub fail: bool,
}

impl ScriptedBackend {
    fn failure(&self) -> Result<(), BackendError> {
        if self.fail {
            return Err(BackendError::Status {
                status: 500,
                body: String::new(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BackendApi for ScriptedBackend {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, BackendError> {
        self.failure()?;
        Ok(AuthSession::new("token-1", request.username.clone()))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, BackendError> {
        self.failure()?;
        Ok(AuthSession::new("token-1", request.username.clone()))
    }

    async fn summarize(&self, _input_text: &str) -> Result<String, BackendError> {
        self.failure()?;
        Ok(self.summary.clone())
    }

    async fn custom_summarize(
        &self,
        _input_text: &str,
        _prompt: &str,
    ) -> Result<String, BackendError> {
        self.failure()?;
        Ok(self.summary.clone())
    }

    async fn flashcards_from_text(
        &self,
        _input_text: &str,
    ) -> Result<Vec<Flashcard>, BackendError> {
        self.failure()?;
        Ok(self.generated.clone())
    }

    async fn flashcards_from_file(&self, _filename: &str) -> Result<Vec<Flashcard>, BackendError> {
        self.failure()?;
        Ok(self.generated.clone())
    }

    async fn upload(&self, _filename: &str, _bytes: Vec<u8>) -> Result<(), BackendError> {
        self.failure()
    }

    async fn extract(&self, _filename: &str) -> Result<String, BackendError> {
        self.failure()?;
        Ok(self.extracted.clone())
    }

    async fn list_saved(&self, _token: &str) -> Result<Vec<Flashcard>, BackendError> {
        self.failure()?;
        self.saved
            .lock()
            .map(|cards| cards.clone())
            .map_err(|_| BackendError::Decode("poisoned".to_string()))
    }

    async fn save_cards(
        &self,
        _token: &str,
        cards: &[Flashcard],
    ) -> Result<Vec<Flashcard>, BackendError> {
        self.failure()?;
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| BackendError::Decode("poisoned".to_string()))?;
        let start = saved.len() as u64;
        for (offset, card) in cards.iter().enumerate() {
            let mut card = card.clone();
            card.id = Some(CardId::new(start + offset as u64 + 1));
            saved.push(card);
        }
        Ok(saved[start as usize..].to_vec())
    }

    async fn delete_card(&self, _token: &str, id: CardId) -> Result<(), BackendError> {
        self.failure()?;
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| BackendError::Decode("poisoned".to_string()))?;
        saved.retain(|card| card.id != Some(id));
        Ok(())
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    session: Option<AuthSession>,
    dark_mode: bool,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn summarizer(&self) -> Arc<SummarizerService> {
        self.services.summarizer()
    }

    fn flashcards(&self) -> Arc<FlashcardService> {
        self.services.flashcards()
    }

    fn documents(&self) -> Arc<DocumentService> {
        self.services.documents()
    }

    fn preferences(&self) -> Arc<PreferencesService> {
        self.services.preferences()
    }

    fn initial_session(&self) -> Option<AuthSession> {
        self.session.clone()
    }

    fn initial_dark_mode(&self) -> bool {
        self.dark_mode
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Auth,
    Home,
    Summarizer,
    Flashcards,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    shared: SharedContent,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = build_app_context(&app);
    let session = use_signal(|| ctx.initial_session());
    let dark = use_signal(|| ctx.initial_dark_mode());
    let shared_value = props.shared.clone();
    let shared = use_signal(move || shared_value);
    use_context_provider(|| ctx);
    use_context_provider(|| SessionSignal(session));
    use_context_provider(|| DarkModeSignal(dark));
    use_context_provider(|| SharedContentSignal(shared));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Auth => rsx! { AuthView {} },
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Summarizer => rsx! { SummarizerView {} },
        ViewKind::Flashcards => rsx! { FlashcardsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: Arc<ScriptedBackend>,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, backend: ScriptedBackend) -> ViewHarness {
    setup_view_harness_with_shared(view, backend, SharedContent::default())
}

pub fn setup_view_harness_with_shared(
    view: ViewKind,
    backend: ScriptedBackend,
    shared: SharedContent,
) -> ViewHarness {
    let backend = Arc::new(backend);
    let backend_api: Arc<dyn BackendApi> = Arc::clone(&backend) as Arc<dyn BackendApi>;
    let storage = Storage::in_memory();
    let services = AppServices::new_with(backend_api, &storage, fixed_clock());

    let session = match view {
        ViewKind::Auth => None,
        _ => Some(AuthSession::new("token-1", "alice")),
    };

    let app = Arc::new(TestApp {
        services: services.clone(),
        session,
        dark_mode: false,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, shared });

    ViewHarness {
        dom,
        backend,
        services,
    }
}
