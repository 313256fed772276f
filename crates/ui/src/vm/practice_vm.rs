/// Index cursor over a fixed run of flashcards. Navigation is clamped
/// at both ends and every move hides the answer again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PracticeCursor {
    index: usize,
    total: usize,
    show_answer: bool,
}

impl PracticeCursor {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total,
            show_answer: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.total == 0 || self.index + 1 >= self.total
    }

    pub fn flip(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn next(&mut self) {
        if !self.at_end() {
            self.index += 1;
            self.show_answer = false;
        }
    }

    pub fn previous(&mut self) {
        if !self.at_start() {
            self.index -= 1;
            self.show_answer = false;
        }
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Card {} of {}", self.index + 1, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::PracticeCursor;

    #[test]
    fn navigation_is_clamped_at_both_ends() {
        let mut cursor = PracticeCursor::new(3);
        cursor.previous();
        assert_eq!(cursor.index(), 0);

        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        assert!(cursor.at_end());

        cursor.next();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn moving_hides_a_flipped_answer() {
        let mut cursor = PracticeCursor::new(2);
        cursor.flip();
        assert!(cursor.show_answer());

        cursor.next();
        assert!(!cursor.show_answer());

        cursor.flip();
        cursor.previous();
        assert!(!cursor.show_answer());
    }

    #[test]
    fn empty_run_stays_pinned() {
        let mut cursor = PracticeCursor::new(0);
        assert!(cursor.at_start());
        assert!(cursor.at_end());
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn position_label_is_one_based() {
        let mut cursor = PracticeCursor::new(5);
        cursor.next();
        assert_eq!(cursor.position_label(), "Card 2 of 5");
    }
}
