use serde::{Deserialize, Serialize};
use crate::models::domain::{AccessGrant, MatchResult, MemberProfile, MemberSummary};

/// Member as exposed to a particular viewer
///
/// Detail fields (tags, industries, unlocks, admin flag) are only present
/// when the viewer passed the visibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberCard {
    // Tried first on deserialize; rejects any detail field
    Summary(MemberSummary),
    Detail(MemberProfile),
}

impl MemberCard {
    pub fn for_viewer(profile: MemberProfile, can_view_detail: bool) -> Self {
        if can_view_detail {
            MemberCard::Detail(profile)
        } else {
            MemberCard::Summary(profile.summary())
        }
    }

    pub fn member_id(&self) -> &str {
        match self {
            MemberCard::Summary(summary) => &summary.member_id,
            MemberCard::Detail(profile) => &profile.member_id,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, MemberCard::Detail(_))
    }
}

/// One recommended member with score detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedMember {
    pub member: MemberCard,
    #[serde(flatten)]
    pub result: MatchResult,
    #[serde(rename = "canViewDetail")]
    pub can_view_detail: bool,
}

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub matches: Vec<RecommendedMember>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the visibility endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityResponse {
    #[serde(rename = "canViewDetail")]
    pub can_view_detail: bool,
    #[serde(rename = "canMessage")]
    pub can_message: bool,
    pub grant: Option<AccessGrant>,
    #[serde(rename = "match")]
    pub result: MatchResult,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
