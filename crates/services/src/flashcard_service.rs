use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use asked_core::Clock;
use asked_core::model::{Flashcard, GeneratedSet, SetId};

use crate::backend::BackendApi;
use crate::error::FlashcardError;

/// Label under which saved cards with no folder are grouped.
pub const UNSORTED_FOLDER: &str = "Unsorted";

/// One folder of saved flashcards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderGroup {
    pub name: String,
    pub cards: Vec<Flashcard>,
}

/// Flashcard generation, the in-memory generated-set collection, and the
/// backend-persisted saved library.
///
/// Generated sets are ephemeral: they live only in this service's memory
/// and are discarded on logout or explicit deletion.
pub struct FlashcardService {
    backend: Arc<dyn BackendApi>,
    clock: Clock,
    generated: Mutex<Vec<GeneratedSet>>,
}

impl FlashcardService {
    #[must_use]
    pub fn new(backend: Arc<dyn BackendApi>, clock: Clock) -> Self {
        Self {
            backend,
            clock,
            generated: Mutex::new(Vec::new()),
        }
    }

    /// Generate flashcards from pasted or extracted text and record the
    /// result as a new generated set.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::EmptyInput` without a network call when
    /// the text is blank, or `FlashcardError::TextGeneration` when the
    /// backend call fails.
    pub async fn generate_from_text(&self, text: &str) -> Result<GeneratedSet, FlashcardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FlashcardError::EmptyInput);
        }
        let cards = self
            .backend
            .flashcards_from_text(text)
            .await
            .map_err(FlashcardError::TextGeneration)?;
        self.record_set(cards)
    }

    /// Generate flashcards from a previously uploaded PDF.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::FileGeneration` when the backend call
    /// fails.
    pub async fn generate_from_file(&self, filename: &str) -> Result<GeneratedSet, FlashcardError> {
        let cards = self
            .backend
            .flashcards_from_file(filename)
            .await
            .map_err(FlashcardError::FileGeneration)?;
        self.record_set(cards)
    }

    /// All generated sets, newest first. Timestamps compare as instants.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::SetState` if the set collection is
    /// unavailable.
    pub fn generated_sets(&self) -> Result<Vec<GeneratedSet>, FlashcardError> {
        let guard = self.generated.lock().map_err(|_| FlashcardError::SetState)?;
        let mut sets = guard.clone();
        sets.sort_by(GeneratedSet::newest_first);
        Ok(sets)
    }

    /// Remove one generated set. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::SetState` if the set collection is
    /// unavailable.
    pub fn discard_set(&self, id: SetId) -> Result<bool, FlashcardError> {
        let mut guard = self.generated.lock().map_err(|_| FlashcardError::SetState)?;
        let before = guard.len();
        guard.retain(|set| set.id != id);
        Ok(guard.len() != before)
    }

    /// Drop every generated set. Invoked on logout.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::SetState` if the set collection is
    /// unavailable.
    pub fn clear_generated(&self) -> Result<(), FlashcardError> {
        let mut guard = self.generated.lock().map_err(|_| FlashcardError::SetState)?;
        guard.clear();
        Ok(())
    }

    /// Fetch the saved library and group it by folder label. Folders sort
    /// alphabetically with the unlabeled bucket last.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::Load` when the backend call fails.
    pub async fn list_saved(&self, token: &str) -> Result<Vec<FolderGroup>, FlashcardError> {
        let cards = self
            .backend
            .list_saved(token)
            .await
            .map_err(FlashcardError::Load)?;
        Ok(group_by_folder(cards))
    }

    /// Stamp the folder label onto every card and persist the batch.
    /// Returns the saved records, ids assigned by the backend.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::Save` when the backend call fails.
    pub async fn save_set(
        &self,
        token: &str,
        cards: Vec<Flashcard>,
        folder: Option<&str>,
    ) -> Result<Vec<Flashcard>, FlashcardError> {
        let folder = folder.map(str::trim).filter(|name| !name.is_empty());
        let labeled: Vec<Flashcard> = cards
            .into_iter()
            .map(|card| match folder {
                Some(name) => card.in_folder(name),
                None => card,
            })
            .collect();
        self.backend
            .save_cards(token, &labeled)
            .await
            .map_err(FlashcardError::Save)
    }

    /// Delete a single saved card by backend id.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::Delete` when the backend call fails.
    pub async fn delete_card(
        &self,
        token: &str,
        id: asked_core::model::CardId,
    ) -> Result<(), FlashcardError> {
        self.backend
            .delete_card(token, id)
            .await
            .map_err(FlashcardError::Delete)
    }

    /// Delete every saved card in the named folder and none outside it.
    /// Returns how many cards were deleted.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::Load` if the library cannot be fetched or
    /// `FlashcardError::Delete` if any per-card delete fails. Deletes are
    /// sequential; a failure leaves the remaining cards in place.
    pub async fn delete_folder(&self, token: &str, name: &str) -> Result<usize, FlashcardError> {
        let cards = self
            .backend
            .list_saved(token)
            .await
            .map_err(FlashcardError::Load)?;
        let mut deleted = 0;
        for card in cards {
            if folder_label(&card) != name {
                continue;
            }
            if let Some(id) = card.id {
                self.backend
                    .delete_card(token, id)
                    .await
                    .map_err(FlashcardError::Delete)?;
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn record_set(&self, cards: Vec<Flashcard>) -> Result<GeneratedSet, FlashcardError> {
        let set = GeneratedSet::new(SetId::new(), cards, self.clock.now());
        let mut guard = self.generated.lock().map_err(|_| FlashcardError::SetState)?;
        guard.push(set.clone());
        Ok(set)
    }
}

fn folder_label(card: &Flashcard) -> &str {
    card.folder
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNSORTED_FOLDER)
}

/// Groups cards by their folder label; unlabeled cards fall into the
/// reserved bucket, which sorts last.
#[must_use]
pub fn group_by_folder(cards: Vec<Flashcard>) -> Vec<FolderGroup> {
    let mut folders: BTreeMap<String, Vec<Flashcard>> = BTreeMap::new();
    for card in cards {
        folders
            .entry(folder_label(&card).to_string())
            .or_default()
            .push(card);
    }
    let unsorted = folders.remove(UNSORTED_FOLDER);
    let mut groups: Vec<FolderGroup> = folders
        .into_iter()
        .map(|(name, cards)| FolderGroup { name, cards })
        .collect();
    if let Some(cards) = unsorted {
        groups.push(FolderGroup {
            name: UNSORTED_FOLDER.to_string(),
            cards,
        });
    }
    groups
}
