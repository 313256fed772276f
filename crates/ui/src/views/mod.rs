mod auth;
mod flashcards;
mod home;
mod state;
mod summarizer;

pub use auth::AuthView;
pub use flashcards::FlashcardsView;
pub use home::HomeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use summarizer::SummarizerView;

#[cfg(test)]
pub mod test_harness;
#[cfg(test)]
mod view_smoke;
