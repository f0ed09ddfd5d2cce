use serde::{Deserialize, Deserializer, Serialize};

use crate::core::rank::Rank;

/// Member profile as stored in the document database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    #[serde(rename = "memberId")]
    pub member_id: String,
    #[serde(default)]
    pub rank: Rank,
    #[serde(rename = "homeVenue", default)]
    pub home_venue: String,
    #[serde(rename = "unlockedVenues", default, deserialize_with = "null_as_empty")]
    pub unlocked_venues: Vec<String>,
    #[serde(rename = "wantTags", default, deserialize_with = "null_as_empty")]
    pub want_tags: Vec<String>,
    #[serde(rename = "giveTags", default, deserialize_with = "null_as_empty")]
    pub give_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub industries: Vec<String>,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: Option<bool>,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl MemberProfile {
    /// Bare profile at `home_venue` with that venue already unlocked
    pub fn new(member_id: impl Into<String>, rank: Rank, home_venue: impl Into<String>) -> Self {
        let home_venue = home_venue.into();
        Self {
            member_id: member_id.into(),
            rank,
            unlocked_venues: vec![home_venue.clone()],
            home_venue,
            want_tags: Vec::new(),
            give_tags: Vec::new(),
            industries: Vec::new(),
            is_admin: None,
            display_name: None,
            avatar_url: None,
        }
    }

    /// Helper to get is_admin as a bool, defaulting to false
    pub fn admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }

    pub fn has_unlocked(&self, venue: &str) -> bool {
        !venue.is_empty() && self.unlocked_venues.iter().any(|v| v == venue)
    }

    /// Public card fields only
    pub fn summary(&self) -> MemberSummary {
        MemberSummary {
            member_id: self.member_id.clone(),
            rank: self.rank,
            home_venue: self.home_venue.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// What any member may see about another, regardless of visibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberSummary {
    #[serde(rename = "memberId")]
    pub member_id: String,
    pub rank: Rank,
    #[serde(rename = "homeVenue")]
    pub home_venue: String,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Compatibility between a viewer and another member, from the viewer's side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub reasons: Vec<String>,
    /// Viewer give-tags the other member wants
    #[serde(rename = "canProvide")]
    pub can_provide: Vec<String>,
    /// Viewer want-tags the other member gives
    #[serde(rename = "canReceive")]
    pub can_receive: Vec<String>,
}

/// Candidate paired with its score against the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMember {
    pub profile: MemberProfile,
    pub result: MatchResult,
}

/// Rule that granted detail/message access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessGrant {
    SelfAccess,
    Admin,
    SameVenue,
    RankPrivilege,
    VenueUnlock,
}

/// Point budget for match scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPoints {
    pub want: u32,
    pub give: u32,
    pub industry: u32,
    pub rank: u32,
}

impl Default for MatchPoints {
    fn default() -> Self {
        Self {
            want: 25,
            give: 25,
            industry: 10,
            rank: 10,
        }
    }
}
