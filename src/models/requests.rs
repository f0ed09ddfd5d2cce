use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score one member against another
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "viewer_id", rename = "viewerId")]
    pub viewer_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "other_id", rename = "otherId")]
    pub other_id: String,
}

/// Request for ranked recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "viewer_id", rename = "viewerId")]
    pub viewer_id: String,
    /// Falls back to the configured default; values <= 0 yield no matches
    #[serde(default)]
    pub limit: Option<i64>,
    /// Explicit candidate pool; the whole member collection is used when absent
    #[validate(length(max = 500))]
    #[serde(alias = "candidate_ids", rename = "candidateIds", default)]
    pub candidate_ids: Option<Vec<String>>,
}

/// Request to check detail/message access
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VisibilityRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "viewer_id", rename = "viewerId")]
    pub viewer_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_id", rename = "targetId")]
    pub target_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_request_defaults() {
        let req: RecommendRequest = serde_json::from_str(r#"{"viewerId": "m1"}"#).unwrap();
        assert_eq!(req.limit, None);
        assert!(req.candidate_ids.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_ids_rejected() {
        let req = VisibilityRequest {
            viewer_id: String::new(),
            target_id: "t".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
