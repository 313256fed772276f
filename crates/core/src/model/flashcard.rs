use serde::{Deserialize, Serialize};

use crate::model::ids::CardId;

/// A question/answer pair, exchanged verbatim with the backend.
///
/// `id` is assigned by the backend when a card is saved; generated cards
/// have no id. `folder` is a free-text grouping label with no uniqueness
/// constraint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl Flashcard {
    /// A new, unsaved card with no folder label.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: None,
            question: question.into(),
            answer: answer.into(),
            folder: None,
        }
    }

    /// Returns a copy of this card labeled with the given folder.
    #[must_use]
    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape_without_optional_fields() {
        let card: Flashcard =
            serde_json::from_str(r#"{"question":"Q?","answer":"A."}"#).unwrap();
        assert_eq!(card.question, "Q?");
        assert_eq!(card.answer, "A.");
        assert!(card.id.is_none());
        assert!(card.folder.is_none());
    }

    #[test]
    fn serializes_without_null_placeholders() {
        let json = serde_json::to_string(&Flashcard::new("Q?", "A.")).unwrap();
        assert!(!json.contains("id"));
        assert!(!json.contains("folder"));
    }

    #[test]
    fn in_folder_labels_the_card() {
        let card = Flashcard::new("Q?", "A.").in_folder("Biology");
        assert_eq!(card.folder.as_deref(), Some("Biology"));
    }
}
