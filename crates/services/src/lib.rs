#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod backend;
pub mod document_service;
pub mod error;
pub mod flashcard_service;
pub mod preferences_service;
pub mod summarizer_service;

pub use asked_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use backend::{
    BackendApi, BackendConfig, BackendConfigError, BackendError, HttpBackend, LoginRequest,
    RegisterRequest,
};
pub use document_service::DocumentService;
pub use error::{
    AppServicesError, AuthError, DocumentError, FlashcardError, PreferencesError, SummarizeError,
};
pub use flashcard_service::{FlashcardService, FolderGroup};
pub use preferences_service::PreferencesService;
pub use summarizer_service::SummarizerService;
