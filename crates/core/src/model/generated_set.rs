use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::model::Flashcard;
use crate::model::ids::SetId;

/// One batch of flashcards produced by a single generation request.
///
/// Held only in memory; discarded on logout or explicit deletion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSet {
    pub id: SetId,
    pub cards: Vec<Flashcard>,
    pub created_at: DateTime<Utc>,
}

impl GeneratedSet {
    #[must_use]
    pub fn new(id: SetId, cards: Vec<Flashcard>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            cards,
            created_at,
        }
    }

    /// Orders sets newest-first by timestamp, comparing instants rather
    /// than their string forms. Ties break on the set id so the order is
    /// stable across renders.
    #[must_use]
    pub fn newest_first(a: &GeneratedSet, b: &GeneratedSet) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    }
}
