// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AccessGrant, MatchPoints, MatchResult, MemberProfile, MemberSummary, ScoredMember};
pub use requests::{RecommendRequest, ScoreRequest, VisibilityRequest};
pub use responses::{ErrorResponse, HealthResponse, MemberCard, RecommendResponse, RecommendedMember, VisibilityResponse};
