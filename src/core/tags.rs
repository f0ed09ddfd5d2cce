use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Decides whether a wanted tag is satisfied by an offered tag
///
/// Scoring only ever talks to this trait, so the comparison heuristic can be
/// tightened without touching the point budget.
pub trait TagMatcher: Send + Sync + fmt::Debug {
    fn matches(&self, wanted: &str, offered: &str) -> bool;

    /// Short identifier for logs
    fn name(&self) -> &'static str;
}

/// Case-insensitive substring match in either direction
///
/// Permissive: "IT" matches "digital transformation". Empty and blank tags
/// never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TagMatcher for SubstringMatcher {
    #[inline]
    fn matches(&self, wanted: &str, offered: &str) -> bool {
        tags_overlap(wanted, offered)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Case-insensitive equality after trimming
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl TagMatcher for ExactMatcher {
    fn matches(&self, wanted: &str, offered: &str) -> bool {
        let wanted = wanted.trim();
        let offered = offered.trim();
        if wanted.is_empty() || offered.is_empty() {
            return false;
        }
        wanted.to_lowercase() == offered.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Tag comparison strategy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatchStrategy {
    #[default]
    Substring,
    Exact,
}

impl TagMatchStrategy {
    pub fn matcher(self) -> Arc<dyn TagMatcher> {
        match self {
            TagMatchStrategy::Substring => Arc::new(SubstringMatcher),
            TagMatchStrategy::Exact => Arc::new(ExactMatcher),
        }
    }
}

/// Bidirectional case-insensitive substring predicate
///
/// `str::contains("")` is always true, so blank tags are rejected up front.
pub fn tags_overlap(a: &str, b: &str) -> bool {
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_both_directions() {
        assert!(tags_overlap("資金調達", "資金調達サポート"));
        assert!(tags_overlap("資金調達サポート", "資金調達"));
        assert!(tags_overlap("Marketing", "digital marketing"));
    }

    #[test]
    fn test_overlap_ignores_case() {
        assert!(tags_overlap("SEO", "seo consulting"));
        assert!(tags_overlap("it", "IT"));
    }

    #[test]
    fn test_blank_tags_never_match() {
        assert!(!tags_overlap("", "anything"));
        assert!(!tags_overlap("anything", ""));
        assert!(!tags_overlap("", ""));
        assert!(!tags_overlap("   ", "design"));
    }

    #[test]
    fn test_unrelated_tags() {
        assert!(!tags_overlap("hiring", "legal advice"));
    }

    #[test]
    fn test_exact_matcher_is_stricter() {
        let exact = ExactMatcher;
        assert!(exact.matches(" Design ", "design"));
        assert!(!exact.matches("IT", "digital transformation"));
        assert!(!exact.matches("", ""));

        let loose = SubstringMatcher;
        assert!(loose.matches("IT", "digital transformation"));
    }

    #[test]
    fn test_strategy_from_config_value() {
        let strategy: TagMatchStrategy = serde_json::from_str("\"exact\"").unwrap();
        assert_eq!(strategy, TagMatchStrategy::Exact);
        assert_eq!(strategy.matcher().name(), "exact");
        assert_eq!(TagMatchStrategy::default().matcher().name(), "substring");
    }
}
