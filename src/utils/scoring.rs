//! Category scoring and selection.
//!
//! # Scoring Rules
//!
//! Every category starts at `0.0`; four additive passes follow:
//!
//! 1. **Domain**: `+60` if the domain contains any of the category's domain
//!    patterns (presence, not count)
//! 2. **URL keywords**: `+10` per keyword found in the lowercased URL, max `30`
//! 3. **Title keywords**: `+10` per keyword found in the lowercased title, max `30`
//! 4. **Description keywords**: `+5` per keyword found in the lowercased
//!    description, max `20`
//!
//! A category can therefore reach `140`; confidence is clamped to `100` at
//! selection time.

use crate::domain::{Category, CategoryTables, ScoreBoard};

/// Flat credit for a domain pattern hit.
pub const DOMAIN_MATCH_SCORE: f64 = 60.0;

/// Highest confidence reported.
pub const CONFIDENCE_CEILING: f64 = 100.0;

/// Confidence below this value is reported as uncategorized.
pub const CONFIDENCE_FLOOR: f64 = 10.0;

/// Per-match credit and cap for one keyword pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordWeight {
    pub per_match: f64,
    pub cap: f64,
}

impl KeywordWeight {
    fn points(self, matches: usize) -> f64 {
        (matches as f64 * self.per_match).min(self.cap)
    }
}

pub const URL_WEIGHT: KeywordWeight = KeywordWeight {
    per_match: 10.0,
    cap: 30.0,
};

pub const TITLE_WEIGHT: KeywordWeight = KeywordWeight {
    per_match: 10.0,
    cap: 30.0,
};

pub const DESCRIPTION_WEIGHT: KeywordWeight = KeywordWeight {
    per_match: 5.0,
    cap: 20.0,
};

/// Scores every category for a bookmark.
///
/// `domain` is the output of [`crate::utils::extract_domain::extract_domain`];
/// an empty domain contributes nothing. The title pass is skipped for an empty
/// title and the description pass for an absent or empty description.
pub fn score(
    tables: &CategoryTables,
    url: &str,
    title: &str,
    description: Option<&str>,
    domain: &str,
) -> ScoreBoard {
    let mut board = ScoreBoard::new();

    for category in Category::SCORED {
        if tables
            .domain_patterns(category)
            .iter()
            .any(|pattern| domain.contains(pattern.as_str()))
        {
            board.add(category, DOMAIN_MATCH_SCORE);
        }
    }

    keyword_pass(&mut board, tables, url, URL_WEIGHT);

    if !title.is_empty() {
        keyword_pass(&mut board, tables, title, TITLE_WEIGHT);
    }

    if let Some(description) = description.filter(|d| !d.is_empty()) {
        keyword_pass(&mut board, tables, description, DESCRIPTION_WEIGHT);
    }

    board
}

/// Picks the best category and its confidence.
///
/// The first category in declaration order wins ties. Confidence is the
/// winning score clamped to `[0, 100]`; below [`CONFIDENCE_FLOOR`] the result
/// is `(Uncategorized, 0.0)`.
pub fn select(board: &ScoreBoard) -> (Category, f64) {
    let mut scores = board.iter();
    let Some(mut best) = scores.next() else {
        return (Category::Uncategorized, 0.0);
    };

    for (category, score) in scores {
        if score > best.1 {
            best = (category, score);
        }
    }

    let confidence = best.1.clamp(0.0, CONFIDENCE_CEILING);
    if confidence < CONFIDENCE_FLOOR {
        (Category::Uncategorized, 0.0)
    } else {
        (best.0, confidence)
    }
}

fn keyword_pass(board: &mut ScoreBoard, tables: &CategoryTables, text: &str, weight: KeywordWeight) {
    let haystack = text.to_lowercase();

    for category in Category::SCORED {
        let matches = tables
            .keyword_patterns(category)
            .iter()
            .filter(|keyword| haystack.contains(keyword.as_str()))
            .count();
        board.add(category, weight.points(matches));
    }
}
