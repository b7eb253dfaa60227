//! Domain and keyword lookup tables used by the scorer.
//!
//! Tables are immutable once built. The service shares a single instance
//! behind an `Arc`; tests build smaller tables through [`CategoryTables::new`].
//!
//! Patterns may appear under more than one category (`stackoverflow.com`,
//! `tutorial`, `documentation`); every owning category receives the credit.

use crate::domain::category::{Category, UnknownCategory};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Errors raised while building tables from external data.
#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("Failed to read tables file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tables JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("'uncategorized' cannot own patterns")]
    ReservedCategory,

    #[error("Empty {table} pattern for category '{category}'")]
    EmptyPattern {
        category: Category,
        table: &'static str,
    },
}

/// Category → pattern list mapping for one table.
pub type PatternMap = BTreeMap<Category, Vec<String>>;

/// Domain substrings and keyword substrings per category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTables {
    domains: PatternMap,
    keywords: PatternMap,
}

/// On-disk layout accepted by [`CategoryTables::from_json_str`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesFile {
    #[serde(default)]
    domains: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    keywords: BTreeMap<String, Vec<String>>,
}

const BUILTIN_DOMAINS: [(Category, &[&str]); 7] = [
    (
        Category::Technology,
        &[
            "github.com",
            "stackoverflow.com",
            "gitlab.com",
            "bitbucket.org",
            "dev.to",
            "hackernoon.com",
            "medium.com",
            "techcrunch.com",
            "arstechnica.com",
            "theverge.com",
            "wired.com",
            "engadget.com",
        ],
    ),
    (
        Category::News,
        &[
            "cnn.com",
            "bbc.com",
            "nytimes.com",
            "theguardian.com",
            "reuters.com",
            "apnews.com",
            "bloomberg.com",
            "wsj.com",
        ],
    ),
    (
        Category::Social,
        &[
            "twitter.com",
            "x.com",
            "facebook.com",
            "instagram.com",
            "linkedin.com",
            "reddit.com",
            "tiktok.com",
            "pinterest.com",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "youtube.com",
            "netflix.com",
            "spotify.com",
            "twitch.tv",
            "imdb.com",
            "rottentomatoes.com",
            "soundcloud.com",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon.com",
            "ebay.com",
            "etsy.com",
            "aliexpress.com",
            "walmart.com",
            "target.com",
            "bestbuy.com",
        ],
    ),
    (
        Category::Education,
        &[
            "coursera.org",
            "udemy.com",
            "khanacademy.org",
            "edx.org",
            "mit.edu",
            "stanford.edu",
            "harvard.edu",
            "udacity.com",
        ],
    ),
    (
        Category::Reference,
        &[
            "wikipedia.org",
            "stackoverflow.com",
            "docs.python.org",
            "developer.mozilla.org",
            "w3schools.com",
            "github.io",
        ],
    ),
];

const BUILTIN_KEYWORDS: [(Category, &[&str]); 7] = [
    (
        Category::Technology,
        &[
            "programming",
            "software",
            "developer",
            "code",
            "api",
            "framework",
            "library",
            "tutorial",
            "documentation",
            "git",
            "python",
            "javascript",
        ],
    ),
    (
        Category::News,
        &[
            "breaking", "latest", "update", "report", "analysis", "politics", "world", "business",
            "economy",
        ],
    ),
    (
        Category::Social,
        &["share", "post", "tweet", "follow", "profile", "community"],
    ),
    (
        Category::Entertainment,
        &[
            "video", "music", "movie", "show", "watch", "listen", "stream", "episode", "season",
        ],
    ),
    (
        Category::Shopping,
        &[
            "buy", "shop", "price", "deal", "sale", "product", "cart", "order", "shipping",
        ],
    ),
    (
        Category::Education,
        &[
            "course",
            "learn",
            "tutorial",
            "lesson",
            "study",
            "teaching",
            "class",
            "university",
            "college",
        ],
    ),
    (
        Category::Reference,
        &[
            "wiki",
            "documentation",
            "reference",
            "guide",
            "manual",
            "docs",
            "specification",
            "standard",
        ],
    ),
];

impl CategoryTables {
    /// Builds tables from explicit maps.
    ///
    /// Patterns are lowercased. Scored categories absent from a map get an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::ReservedCategory`] if the uncategorized sentinel
    /// owns patterns, or [`TablesError::EmptyPattern`] for an empty pattern
    /// (an empty substring would match every input).
    pub fn new(domains: PatternMap, keywords: PatternMap) -> Result<Self, TablesError> {
        Ok(Self {
            domains: normalize_table(domains, "domain")?,
            keywords: normalize_table(keywords, "keyword")?,
        })
    }

    /// The default tables shipped with the service.
    pub fn builtin() -> Self {
        Self {
            domains: builtin_table(&BUILTIN_DOMAINS),
            keywords: builtin_table(&BUILTIN_KEYWORDS),
        }
    }

    /// Parses tables from JSON of the form
    /// `{ "domains": { "<category>": [..] }, "keywords": { "<category>": [..] } }`.
    ///
    /// # Errors
    ///
    /// See [`TablesError`].
    pub fn from_json_str(json: &str) -> Result<Self, TablesError> {
        let file: TablesFile = serde_json::from_str(json)?;
        Self::new(parse_keys(file.domains)?, parse_keys(file.keywords)?)
    }

    /// Reads and parses a JSON tables file.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Io`] if the file cannot be read, otherwise see
    /// [`Self::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn domain_patterns(&self, category: Category) -> &[String] {
        self.domains
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn keyword_patterns(&self, category: Category) -> &[String] {
        self.keywords
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for CategoryTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_table(entries: &[(Category, &[&str])]) -> PatternMap {
    entries
        .iter()
        .map(|(category, patterns)| {
            (
                *category,
                patterns.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}

fn parse_keys(raw: BTreeMap<String, Vec<String>>) -> Result<PatternMap, TablesError> {
    raw.into_iter()
        .map(|(key, patterns)| -> Result<_, TablesError> {
            Ok((key.parse::<Category>()?, patterns))
        })
        .collect()
}

fn normalize_table(table: PatternMap, name: &'static str) -> Result<PatternMap, TablesError> {
    let mut normalized: PatternMap = Category::SCORED.iter().map(|c| (*c, Vec::new())).collect();

    for (category, patterns) in table {
        if !category.is_scored() {
            return Err(TablesError::ReservedCategory);
        }

        let slot = normalized.entry(category).or_default();
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(TablesError::EmptyPattern {
                    category,
                    table: name,
                });
            }
            slot.push(pattern.to_lowercase());
        }
    }

    Ok(normalized)
}
