use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use asked_core::model::{AuthSession, CardId, Flashcard};
use asked_core::time::fixed_clock;
use services::backend::{BackendApi, BackendError, LoginRequest, RegisterRequest};
use services::FlashcardService;

/// Backend double with an in-memory saved-card store and canned
/// generation output.
#[derive(Default)]
struct FakeCardBackend {
    generation_calls: AtomicUsize,
    saved: Mutex<Vec<Flashcard>>,
    deleted: Mutex<Vec<CardId>>,
}

impl FakeCardBackend {
    fn with_saved(cards: Vec<Flashcard>) -> Self {
        Self {
            saved: Mutex::new(cards),
            ..Self::default()
        }
    }
}

#[async_trait]
impl BackendApi for FakeCardBackend {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthSession, BackendError> {
        unimplemented!("not used by flashcard tests")
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthSession, BackendError> {
        unimplemented!("not used by flashcard tests")
    }

    async fn summarize(&self, _input_text: &str) -> Result<String, BackendError> {
        unimplemented!("not used by flashcard tests")
    }

    async fn custom_summarize(
        &self,
        _input_text: &str,
        _prompt: &str,
    ) -> Result<String, BackendError> {
        unimplemented!("not used by flashcard tests")
    }

    async fn flashcards_from_text(
        &self,
        _input_text: &str,
    ) -> Result<Vec<Flashcard>, BackendError> {
        self.generation_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            Flashcard::new("What is Rust?", "A systems language."),
            Flashcard::new("What is a borrow?", "A non-owning reference."),
        ])
    }

    async fn flashcards_from_file(&self, _filename: &str) -> Result<Vec<Flashcard>, BackendError> {
        self.generation_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Flashcard::new("From PDF?", "Yes.")])
    }

    async fn upload(&self, _filename: &str, _bytes: Vec<u8>) -> Result<(), BackendError> {
        unimplemented!("not used by flashcard tests")
    }

    async fn extract(&self, _filename: &str) -> Result<String, BackendError> {
        unimplemented!("not used by flashcard tests")
    }

    async fn list_saved(&self, _token: &str) -> Result<Vec<Flashcard>, BackendError> {
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn save_cards(
        &self,
        _token: &str,
        cards: &[Flashcard],
    ) -> Result<Vec<Flashcard>, BackendError> {
        let mut saved = self.saved.lock().unwrap();
        let mut next_id = saved.len() as u64 + 1;
        let mut records = Vec::with_capacity(cards.len());
        for card in cards {
            let mut record = card.clone();
            record.id = Some(CardId::new(next_id));
            next_id += 1;
            saved.push(record.clone());
            records.push(record);
        }
        Ok(records)
    }

    async fn delete_card(&self, _token: &str, id: CardId) -> Result<(), BackendError> {
        self.saved.lock().unwrap().retain(|card| card.id != Some(id));
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

fn saved_card(id: u64, folder: &str) -> Flashcard {
    Flashcard {
        id: Some(CardId::new(id)),
        question: format!("Q{id}"),
        answer: format!("A{id}"),
        folder: Some(folder.to_string()),
    }
}

#[tokio::test]
async fn generation_populates_a_set_with_the_returned_pairs() {
    let backend = Arc::new(FakeCardBackend::default());
    let service = FlashcardService::new(Arc::clone(&backend) as Arc<dyn BackendApi>, fixed_clock());

    let set = service
        .generate_from_text("Rust is a systems language.")
        .await
        .expect("generate");

    assert_eq!(set.cards.len(), 2);
    assert_eq!(set.cards[0].question, "What is Rust?");
    assert_eq!(set.cards[0].answer, "A systems language.");
    assert_eq!(backend.generation_calls.load(Ordering::SeqCst), 1);

    let sets = service.generated_sets().expect("sets");
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0], set);
}

#[tokio::test]
async fn empty_input_blocks_the_generation_call() {
    let backend = Arc::new(FakeCardBackend::default());
    let service = FlashcardService::new(Arc::clone(&backend) as Arc<dyn BackendApi>, fixed_clock());

    let err = service
        .generate_from_text("   ")
        .await
        .expect_err("should reject blank input");
    assert_eq!(err.to_string(), "Please provide text content or upload a PDF");
    assert_eq!(backend.generation_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn discard_and_clear_empty_the_generated_collection() {
    let backend = Arc::new(FakeCardBackend::default());
    let service = FlashcardService::new(backend as Arc<dyn BackendApi>, fixed_clock());

    let first = service.generate_from_text("text one").await.expect("one");
    service.generate_from_file("notes.pdf").await.expect("two");
    assert_eq!(service.generated_sets().expect("sets").len(), 2);

    assert!(service.discard_set(first.id).expect("discard"));
    let remaining = service.generated_sets().expect("sets");
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|set| set.id != first.id));

    // Discarding an unknown id removes nothing.
    assert!(!service.discard_set(first.id).expect("discard again"));

    service.clear_generated().expect("clear");
    assert!(service.generated_sets().expect("sets").is_empty());
}

#[tokio::test]
async fn save_set_stamps_the_folder_onto_every_card() {
    let backend = Arc::new(FakeCardBackend::default());
    let service = FlashcardService::new(Arc::clone(&backend) as Arc<dyn BackendApi>, fixed_clock());

    let saved = service
        .save_set(
            "tok-123",
            vec![Flashcard::new("Q1", "A1"), Flashcard::new("Q2", "A2")],
            Some("Biology"),
        )
        .await
        .expect("save");

    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|card| card.folder.as_deref() == Some("Biology")));
    assert!(saved.iter().all(|card| card.id.is_some()));
}

#[tokio::test]
async fn delete_folder_removes_exactly_that_folder() {
    let backend = Arc::new(FakeCardBackend::with_saved(vec![
        saved_card(1, "Biology"),
        saved_card(2, "Chemistry"),
        saved_card(3, "Biology"),
        saved_card(4, "Chemistry"),
    ]));
    let service = FlashcardService::new(Arc::clone(&backend) as Arc<dyn BackendApi>, fixed_clock());

    let deleted = service
        .delete_folder("tok-123", "Biology")
        .await
        .expect("delete folder");

    assert_eq!(deleted, 2);
    let deleted_ids = backend.deleted.lock().unwrap().clone();
    assert_eq!(deleted_ids, vec![CardId::new(1), CardId::new(3)]);

    let groups = service.list_saved("tok-123").await.expect("list");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Chemistry");
    assert_eq!(groups[0].cards.len(), 2);
}
