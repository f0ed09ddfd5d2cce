use crate::core::{scoring::MatchScorer, visibility::VisibilityPolicy};
use crate::models::{AccessGrant, MemberCard, MatchResult, MemberProfile, RecommendedMember};

/// Result of a recommendation run
#[derive(Debug)]
pub struct RecommendResult {
    pub matches: Vec<RecommendedMember>,
    pub total_candidates: usize,
}

/// Everything a profile page needs about one other member
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInsight {
    pub result: MatchResult,
    pub can_view_detail: bool,
    pub can_message: bool,
    pub grant: Option<AccessGrant>,
}

/// Pairs the scorer with the visibility policy for callers that want both
/// answers at once
///
/// The two never consult each other; this only runs them side by side.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    scorer: MatchScorer,
    policy: VisibilityPolicy,
}

impl Matcher {
    pub fn new(scorer: MatchScorer) -> Self {
        Self {
            scorer,
            policy: VisibilityPolicy::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatchScorer::with_defaults())
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    /// Score and authorize `target` for `viewer`
    pub fn insight(&self, viewer: &MemberProfile, target: &MemberProfile) -> MemberInsight {
        let grant = self.policy.access_grant(viewer, target);
        MemberInsight {
            result: self.scorer.score_members(viewer, target),
            can_view_detail: grant.is_some(),
            can_message: self.policy.can_message(Some(viewer), Some(target)),
            grant,
        }
    }

    /// Recommend up to `limit` candidates, each tagged with whether the viewer
    /// may open their detail page
    ///
    /// Non-positive limits return nothing.
    pub fn recommend(
        &self,
        viewer: &MemberProfile,
        candidates: Vec<MemberProfile>,
        limit: i64,
    ) -> RecommendResult {
        let total_candidates = candidates
            .iter()
            .filter(|c| c.member_id != viewer.member_id)
            .count();

        let limit = usize::try_from(limit).unwrap_or(0);

        let matches = self
            .scorer
            .recommend(viewer, candidates, limit)
            .into_iter()
            .map(|scored| {
                let can_view_detail = self
                    .policy
                    .can_view_detail(Some(viewer), Some(&scored.profile));
                RecommendedMember {
                    member: MemberCard::for_viewer(scored.profile, can_view_detail),
                    result: scored.result,
                    can_view_detail,
                }
            })
            .collect();

        RecommendResult {
            matches,
            total_candidates,
        }
    }
}
