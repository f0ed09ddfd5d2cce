use std::sync::Arc;

use crate::core::rank::MAX_RANK_BONUS;
use crate::core::tags::{SubstringMatcher, TagMatcher};
use crate::models::{MatchPoints, MatchResult, MemberProfile, ScoredMember};

/// Computes viewer-relative compatibility between two members
///
/// Every bucket adds to both the achieved and the maximum total, so the final
/// score is a percentage of what this viewer could have earned:
///
/// ```text
/// for want in viewer.wants:  max += 25; if other gives it: achieved += 25
/// for give in viewer.gives:  max += 25; if other wants it: achieved += 25
/// industry:                  max += 10; if any shared:     achieved += 10
/// rank:                      max += 10;                    achieved += bonus(other.rank)
/// score = round(100 * achieved / max)
/// ```
#[derive(Debug, Clone)]
pub struct MatchScorer {
    points: MatchPoints,
    tag_matcher: Arc<dyn TagMatcher>,
}

impl MatchScorer {
    pub fn new(points: MatchPoints, tag_matcher: Arc<dyn TagMatcher>) -> Self {
        Self { points, tag_matcher }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatchPoints::default(), Arc::new(SubstringMatcher))
    }

    /// Score `other` from `viewer`'s perspective
    ///
    /// A missing profile on either side gives the zero result.
    pub fn score(
        &self,
        viewer: Option<&MemberProfile>,
        other: Option<&MemberProfile>,
    ) -> MatchResult {
        match (viewer, other) {
            (Some(viewer), Some(other)) => self.score_members(viewer, other),
            _ => MatchResult::default(),
        }
    }

    pub fn score_members(&self, viewer: &MemberProfile, other: &MemberProfile) -> MatchResult {
        let mut achieved: u32 = 0;
        let mut max: u32 = 0;
        let mut result = MatchResult::default();

        // What the viewer can receive
        for want in &viewer.want_tags {
            max += self.points.want;
            if other.give_tags.iter().any(|give| self.tag_matcher.matches(want, give)) {
                achieved += self.points.want;
                result.can_receive.push(want.clone());
                result.reasons.push(format!("can receive/benefit from {}", want));
            }
        }

        // What the viewer can provide
        for give in &viewer.give_tags {
            max += self.points.give;
            if other.want_tags.iter().any(|want| self.tag_matcher.matches(want, give)) {
                achieved += self.points.give;
                result.can_provide.push(give.clone());
                result.reasons.push(format!("other member wants {}", give));
            }
        }

        max += self.points.industry;
        if shares_industry(&viewer.industries, &other.industries) {
            achieved += self.points.industry;
            result.reasons.push("same industry".to_string());
        }

        max += self.points.rank;
        let rank_bonus = other.rank.bonus_points() * self.points.rank / MAX_RANK_BONUS;
        if rank_bonus > 0 {
            achieved += rank_bonus;
            result.reasons.push("high-rank member".to_string());
        }

        result.score = normalize_score(achieved, max);
        result
    }

    /// Rank `candidates` for `viewer`, best first
    ///
    /// The viewer is dropped from the pool by `member_id`. Ties keep their
    /// input order.
    pub fn recommend(
        &self,
        viewer: &MemberProfile,
        candidates: Vec<MemberProfile>,
        limit: usize,
    ) -> Vec<ScoredMember> {
        if limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<ScoredMember> = candidates
            .into_iter()
            .filter(|candidate| candidate.member_id != viewer.member_id)
            .map(|candidate| {
                let result = self.score_members(viewer, &candidate);
                ScoredMember {
                    profile: candidate,
                    result,
                }
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        scored.truncate(limit);

        tracing::debug!(
            "Recommended {} members for {}",
            scored.len(),
            viewer.member_id
        );

        scored
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// True when both lists hold at least one identical non-empty label
#[inline]
pub fn shares_industry(a: &[String], b: &[String]) -> bool {
    a.iter()
        .filter(|industry| !industry.is_empty())
        .any(|industry| b.contains(industry))
}

/// Percentage of `achieved` over `max`, rounded half up and clamped to 0-100
#[inline]
pub fn normalize_score(achieved: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let pct = (100.0 * achieved as f64 / max as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rank::Rank;
    use crate::core::tags::ExactMatcher;

    fn create_member(id: &str, rank: Rank, wants: &[&str], gives: &[&str]) -> MemberProfile {
        let mut profile = MemberProfile::new(id, rank, "shibuya");
        profile.want_tags = wants.iter().map(|s| s.to_string()).collect();
        profile.give_tags = gives.iter().map(|s| s.to_string()).collect();
        profile
    }

    #[test]
    fn test_want_matches_give_substring() {
        let scorer = MatchScorer::with_defaults();
        let viewer = create_member("v", Rank::White, &["資金調達"], &[]);
        let other = create_member("o", Rank::White, &[], &["資金調達サポート"]);

        let result = scorer.score_members(&viewer, &other);

        // achieved 25 of 25 + 10 + 10
        assert_eq!(result.score, 56);
        assert_eq!(result.can_receive, vec!["資金調達"]);
        assert!(result.can_provide.is_empty());
        assert_eq!(result.reasons, vec!["can receive/benefit from 資金調達"]);
    }

    #[test]
    fn test_reason_order_follows_buckets() {
        let scorer = MatchScorer::with_defaults();
        let mut viewer = create_member("v", Rank::White, &["design"], &["hiring"]);
        viewer.industries = vec!["IT".to_string()];
        let mut other = create_member("o", Rank::Gold, &["hiring help"], &["web design"]);
        other.industries = vec!["IT".to_string()];

        let result = scorer.score_members(&viewer, &other);

        assert_eq!(
            result.reasons,
            vec![
                "can receive/benefit from design",
                "other member wants hiring",
                "same industry",
                "high-rank member",
            ]
        );
        // (25 + 25 + 10 + 7) / 70
        assert_eq!(result.score, 96);
    }

    #[test]
    fn test_duplicate_tags_keep_duplicate_reasons() {
        let scorer = MatchScorer::with_defaults();
        let viewer = create_member("v", Rank::White, &["seo", "seo"], &[]);
        let other = create_member("o", Rank::White, &[], &["SEO audit"]);

        let result = scorer.score_members(&viewer, &other);

        assert_eq!(result.can_receive, vec!["seo", "seo"]);
        assert_eq!(result.reasons.len(), 2);
    }

    #[test]
    fn test_missing_profile_gives_zero() {
        let scorer = MatchScorer::with_defaults();
        let member = create_member("v", Rank::Platinum, &["a"], &["b"]);

        assert_eq!(scorer.score(None, Some(&member)), MatchResult::default());
        assert_eq!(scorer.score(Some(&member), None), MatchResult::default());
        assert_eq!(scorer.score(None, None), MatchResult::default());
    }

    #[test]
    fn test_rank_only_denominator() {
        let scorer = MatchScorer::with_defaults();
        let viewer = create_member("v", Rank::White, &[], &[]);
        let other = create_member("o", Rank::Platinum, &[], &[]);

        // 10 of 20: industry bucket still counts toward max
        assert_eq!(scorer.score_members(&viewer, &other).score, 50);
    }

    #[test]
    fn test_zero_points_budget_guards_division() {
        let points = MatchPoints {
            want: 0,
            give: 0,
            industry: 0,
            rank: 0,
        };
        let scorer = MatchScorer::new(points, Arc::new(SubstringMatcher));
        let viewer = create_member("v", Rank::White, &["x"], &[]);
        let other = create_member("o", Rank::Platinum, &[], &["x"]);

        let result = scorer.score_members(&viewer, &other);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_exact_strategy_rejects_partial_tags() {
        let scorer = MatchScorer::new(MatchPoints::default(), Arc::new(ExactMatcher));
        let viewer = create_member("v", Rank::White, &["IT"], &[]);
        let other = create_member("o", Rank::White, &[], &["digital transformation"]);

        let result = scorer.score_members(&viewer, &other);
        assert!(result.can_receive.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_industry_labels_do_not_match() {
        assert!(!shares_industry(&["".to_string()], &["".to_string()]));
        assert!(shares_industry(
            &["IT".to_string(), "finance".to_string()],
            &["finance".to_string()]
        ));
        assert!(!shares_industry(&["IT".to_string()], &["it".to_string()]));
    }

    #[test]
    fn test_normalize_score() {
        assert_eq!(normalize_score(0, 0), 0);
        assert_eq!(normalize_score(15, 20), 75);
        assert_eq!(normalize_score(1, 8), 13);
        assert_eq!(normalize_score(30, 20), 100);
    }

    #[test]
    fn test_recommend_stable_ties() {
        let scorer = MatchScorer::with_defaults();
        let viewer = create_member("v", Rank::White, &[], &[]);
        let candidates = vec![
            create_member("a", Rank::Blue, &[], &[]),
            create_member("b", Rank::Gold, &[], &[]),
            create_member("c", Rank::Blue, &[], &[]),
            create_member("v", Rank::Platinum, &[], &[]),
        ];

        let ids: Vec<String> = scorer
            .recommend(&viewer, candidates, 10)
            .into_iter()
            .map(|m| m.profile.member_id)
            .collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_recommend_zero_limit() {
        let scorer = MatchScorer::with_defaults();
        let viewer = create_member("v", Rank::White, &[], &[]);
        let candidates = vec![create_member("a", Rank::Blue, &[], &[])];

        assert!(scorer.recommend(&viewer, candidates, 0).is_empty());
    }
}
