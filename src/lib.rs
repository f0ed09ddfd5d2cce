//! Matchgate - match scoring and profile visibility for a membership network
//!
//! The core is two pure components: [`MatchScorer`] rates how well two
//! members' wants and gives line up, and [`VisibilityPolicy`] decides whether
//! one member may view or message another. The HTTP service in `routes`
//! fetches profiles from the document store and calls into them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Matcher, MatchScorer, Rank, TagMatcher, VisibilityPolicy};
pub use self::models::{AccessGrant, MatchPoints, MatchResult, MemberProfile, ScoredMember};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let member = MemberProfile::new("m1", Rank::Gold, "shibuya");
        let scorer = MatchScorer::default();
        assert_eq!(scorer.score(Some(&member), None), MatchResult::default());
        assert!(VisibilityPolicy::new().can_view_detail(Some(&member), Some(&member)));
    }
}
