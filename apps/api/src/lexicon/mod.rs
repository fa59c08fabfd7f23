// Keyword lexicons: crisis phrase detection and naive sentiment polarity.
// Matching is plain lower-cased substring search with no stemming or negation
// handling, so "not happy" still counts as positive.

pub mod crisis;
pub mod sentiment;

pub use crisis::{crisis_resources, detect_crisis, CrisisResources};
pub use sentiment::sentiment;

/// Number of `keywords` present anywhere in already lower-cased `text`.
/// Each keyword counts at most once.
pub fn count_present(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

/// True when any of `keywords` occurs in already lower-cased `text`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
