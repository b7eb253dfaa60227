//! Suggested tag generation from a bookmark's domain and title.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum number of tags returned.
pub const MAX_TAGS: usize = 5;

/// Maximum number of title words turned into tags.
pub const MAX_TITLE_TAGS: usize = 3;

/// Minimum length of the domain fragment to be used as a tag.
pub const MIN_DOMAIN_TAG_LEN: usize = 3;

/// Minimum length of a title word to be used as a tag.
pub const MIN_WORD_LEN: usize = 3;

/// Maximal runs of letters, any script. Only pure ASCII runs become tags.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Alphabetic}+").unwrap());

/// Common words never turned into tags.
const STOPWORDS: [&str; 21] = [
    "the", "and", "for", "with", "from", "that", "this", "your", "you", "are", "was", "were",
    "been", "have", "has", "had", "can", "will", "would", "could", "should",
];

/// Derives up to [`MAX_TAGS`] unique lowercase tags.
///
/// # Tag Sources
///
/// 1. **Domain**: the part before the first `.` if it is at least
///    [`MIN_DOMAIN_TAG_LEN`] characters (`github.com` → `github`)
/// 2. **Title**: the first [`MAX_TITLE_TAGS`] words of three or more letters
///    that are not stopwords, in title order. Digits and punctuation split
///    words (`python3` → `python`). A word containing a non-ASCII letter is
///    skipped whole (`café` gives no tag, never `caf`).
///
/// Duplicates keep their first position. Tags are never re-sorted.
///
/// # Examples
///
/// ```
/// use bookmark_classifier::utils::tag_generator::generate_tags;
///
/// let tags = generate_tags("Awesome Python Tutorial", "github.com");
/// assert_eq!(tags, ["github", "awesome", "python", "tutorial"]);
/// ```
pub fn generate_tags(title: &str, domain: &str) -> Vec<String> {
    let mut tags = Vec::with_capacity(MAX_TITLE_TAGS + 1);

    if let Some(tag) = domain_tag(domain) {
        tags.push(tag);
    }

    if !title.is_empty() {
        let lowered = title.to_lowercase();
        tags.extend(
            WORD_REGEX
                .find_iter(&lowered)
                .map(|m| m.as_str())
                .filter(|word| is_tag_word(word))
                .filter(|word| !STOPWORDS.contains(word))
                .take(MAX_TITLE_TAGS)
                .map(str::to_string),
        );
    }

    let mut seen = HashSet::new();
    tags.retain(|tag| seen.insert(tag.clone()));
    tags.truncate(MAX_TAGS);
    tags
}

fn is_tag_word(word: &str) -> bool {
    word.len() >= MIN_WORD_LEN && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn domain_tag(domain: &str) -> Option<String> {
    let fragment = domain.split('.').next()?;
    (fragment.chars().count() >= MIN_DOMAIN_TAG_LEN).then(|| fragment.to_lowercase())
}
