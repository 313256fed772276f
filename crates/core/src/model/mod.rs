mod credentials;
mod flashcard;
mod generated_set;
mod ids;
mod preferences;
mod session;

pub use credentials::{CredentialError, LoginDraft, RegisterDraft};
pub use flashcard::Flashcard;
pub use generated_set::GeneratedSet;
pub use ids::{CardId, ParseIdError, SetId};
pub use preferences::Preferences;
pub use session::AuthSession;
