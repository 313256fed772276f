use asked_core::model::{Flashcard, GeneratedSet, SetId};
use services::FolderGroup;

/// UI-ready representation of one generation batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSetVm {
    pub id: SetId,
    pub created_label: String,
    pub count_label: String,
    pub cards: Vec<Flashcard>,
}

/// UI-ready representation of one saved-library folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderVm {
    pub name: String,
    pub count_label: String,
    pub cards: Vec<Flashcard>,
}

#[must_use]
pub fn map_generated_set(set: &GeneratedSet) -> GeneratedSetVm {
    GeneratedSetVm {
        id: set.id,
        created_label: set.created_at.format("%b %-d, %Y %H:%M").to_string(),
        count_label: card_count_label(set.cards.len()),
        cards: set.cards.clone(),
    }
}

#[must_use]
pub fn map_folder(group: &FolderGroup) -> FolderVm {
    FolderVm {
        name: group.name.clone(),
        count_label: card_count_label(group.cards.len()),
        cards: group.cards.clone(),
    }
}

#[must_use]
pub fn card_count_label(count: usize) -> String {
    if count == 1 {
        "1 card".to_string()
    } else {
        format!("{count} cards")
    }
}

#[cfg(test)]
mod tests {
    use asked_core::model::{Flashcard, GeneratedSet, SetId};
    use asked_core::time::fixed_now;
    use services::FolderGroup;

    use super::{card_count_label, map_folder, map_generated_set};

    fn card(question: &str) -> Flashcard {
        Flashcard::new(question, "because")
    }

    #[test]
    fn count_label_handles_singular_and_plural() {
        assert_eq!(card_count_label(0), "0 cards");
        assert_eq!(card_count_label(1), "1 card");
        assert_eq!(card_count_label(12), "12 cards");
    }

    #[test]
    fn generated_set_keeps_cards_and_formats_the_timestamp() {
        let set = GeneratedSet {
            id: SetId::new(),
            cards: vec![card("What is osmosis?"), card("What is diffusion?")],
            created_at: fixed_now(),
        };
        let vm = map_generated_set(&set);
        assert_eq!(vm.cards.len(), 2);
        assert_eq!(vm.count_label, "2 cards");
        // fixed_now is 2023-11-14 22:13:20 UTC
        assert_eq!(vm.created_label, "Nov 14, 2023 22:13");
    }

    #[test]
    fn folder_vm_carries_the_group_name() {
        let group = FolderGroup {
            name: "Biology".to_string(),
            cards: vec![card("What is a cell?")],
        };
        let vm = map_folder(&group);
        assert_eq!(vm.name, "Biology");
        assert_eq!(vm.count_label, "1 card");
    }
}
