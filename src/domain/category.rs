//! Closed set of bookmark categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topical label assigned to a bookmark.
///
/// The seven scored variants are declared in tie-break order: when two
/// categories accumulate the same score, the one declared first wins.
/// [`Category::Uncategorized`] is the sentinel returned when no category
/// reaches the confidence floor; it never owns table patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    News,
    Social,
    Entertainment,
    Shopping,
    Education,
    Reference,
    Uncategorized,
}

/// Returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Scored categories in declaration (tie-break) order.
    pub const SCORED: [Category; 7] = [
        Category::Technology,
        Category::News,
        Category::Social,
        Category::Entertainment,
        Category::Shopping,
        Category::Education,
        Category::Reference,
    ];

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::News => "news",
            Category::Social => "social",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Education => "education",
            Category::Reference => "reference",
            Category::Uncategorized => "uncategorized",
        }
    }

    /// Position in [`Category::SCORED`], `None` for the sentinel.
    pub const fn index(self) -> Option<usize> {
        match self {
            Category::Technology => Some(0),
            Category::News => Some(1),
            Category::Social => Some(2),
            Category::Entertainment => Some(3),
            Category::Shopping => Some(4),
            Category::Education => Some(5),
            Category::Reference => Some(6),
            Category::Uncategorized => None,
        }
    }

    pub const fn is_scored(self) -> bool {
        self.index().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technology" => Ok(Category::Technology),
            "news" => Ok(Category::News),
            "social" => Ok(Category::Social),
            "entertainment" => Ok(Category::Entertainment),
            "shopping" => Ok(Category::Shopping),
            "education" => Ok(Category::Education),
            "reference" => Ok(Category::Reference),
            "uncategorized" => Ok(Category::Uncategorized),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_order_matches_index() {
        for (i, category) in Category::SCORED.iter().enumerate() {
            assert_eq!(category.index(), Some(i));
        }
        assert_eq!(Category::Uncategorized.index(), None);
    }

    #[test]
    fn test_string_round_trip() {
        for category in Category::SCORED
            .iter()
            .copied()
            .chain([Category::Uncategorized])
        {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "sports".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("sports".to_string()));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Technology".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");

        let parsed: Category = serde_json::from_str("\"uncategorized\"").unwrap();
        assert_eq!(parsed, Category::Uncategorized);
    }
}
