// Core algorithm exports
pub mod matcher;
pub mod rank;
pub mod scoring;
pub mod tags;
pub mod visibility;

pub use matcher::{Matcher, MemberInsight, RecommendResult};
pub use rank::{Rank, DETAIL_VIEW_THRESHOLD};
pub use scoring::{normalize_score, shares_industry, MatchScorer};
pub use tags::{tags_overlap, ExactMatcher, SubstringMatcher, TagMatchStrategy, TagMatcher};
pub use visibility::VisibilityPolicy;
