//! Per-call score accumulator.

use crate::domain::category::Category;

/// Accumulated score for each of the seven scored categories.
///
/// Starts at zero for every category and lives for a single classification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBoard {
    scores: [f64; Category::SCORED.len()],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `points` to `category`. The uncategorized sentinel has no slot and is ignored.
    pub fn add(&mut self, category: Category, points: f64) {
        if let Some(i) = category.index() {
            self.scores[i] += points;
        }
    }

    /// Current score of `category` (always `0.0` for the sentinel).
    pub fn get(&self, category: Category) -> f64 {
        category.index().map_or(0.0, |i| self.scores[i])
    }

    /// Iterates `(category, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::SCORED.iter().copied().zip(self.scores.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_zeroed() {
        let board = ScoreBoard::new();
        assert!(board.iter().all(|(_, score)| score == 0.0));
        assert_eq!(board.iter().count(), 7);
    }

    #[test]
    fn test_add_accumulates() {
        let mut board = ScoreBoard::new();
        board.add(Category::News, 60.0);
        board.add(Category::News, 10.0);
        board.add(Category::Social, 5.0);

        assert_eq!(board.get(Category::News), 70.0);
        assert_eq!(board.get(Category::Social), 5.0);
        assert_eq!(board.get(Category::Technology), 0.0);
    }

    #[test]
    fn test_uncategorized_is_ignored() {
        let mut board = ScoreBoard::new();
        board.add(Category::Uncategorized, 42.0);

        assert_eq!(board, ScoreBoard::new());
        assert_eq!(board.get(Category::Uncategorized), 0.0);
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let order: Vec<Category> = ScoreBoard::new().iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::SCORED.to_vec());
    }
}
