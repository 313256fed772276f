use serde::{Deserialize, Serialize};

/// Locally persisted display preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Preferences {
    #[must_use]
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode }
    }
}
