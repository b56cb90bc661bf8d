//! Mention extraction from draft content.

use once_cell::sync::Lazy;
use regex::Regex;

/// `@handle` or `@namespace/handle`, not preceded by a word character so
/// e-mail addresses do not count.
static MENTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^\w@])@((?:[a-z0-9]+/)?[A-Za-z0-9_]+)")
        .expect("Invalid mention regex pattern")
});

/// Handles mentioned in `content`, in order of appearance.
pub fn get_mentions(content: &str) -> Vec<String> {
    MENTION_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

pub fn count_mentions(content: &str) -> usize {
    MENTION_REGEX.captures_iter(content).count()
}
