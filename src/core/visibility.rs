use crate::models::{AccessGrant, MemberProfile};

/// Gatekeeper for profile detail and direct messages
///
/// Access is granted when any of these holds, checked in order:
/// 1. viewer is the target
/// 2. viewer is an admin
/// 3. both share a home venue
/// 4. viewer rank is GOLD or above
/// 5. viewer has unlocked the target's home venue
///
/// Messaging uses the same rule as detail viewing.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityPolicy;

impl VisibilityPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Missing viewer or target is always denied
    pub fn can_view_detail(
        &self,
        viewer: Option<&MemberProfile>,
        target: Option<&MemberProfile>,
    ) -> bool {
        match (viewer, target) {
            (Some(viewer), Some(target)) => self.access_grant(viewer, target).is_some(),
            _ => false,
        }
    }

    pub fn can_message(
        &self,
        viewer: Option<&MemberProfile>,
        target: Option<&MemberProfile>,
    ) -> bool {
        self.can_view_detail(viewer, target)
    }

    /// First rule that lets `viewer` see `target`, if any
    pub fn access_grant(
        &self,
        viewer: &MemberProfile,
        target: &MemberProfile,
    ) -> Option<AccessGrant> {
        let grant = if viewer.member_id == target.member_id {
            Some(AccessGrant::SelfAccess)
        } else if viewer.admin() {
            Some(AccessGrant::Admin)
        } else if !viewer.home_venue.is_empty() && viewer.home_venue == target.home_venue {
            Some(AccessGrant::SameVenue)
        } else if viewer.rank.can_view_all_venues() {
            Some(AccessGrant::RankPrivilege)
        } else if viewer.has_unlocked(&target.home_venue) {
            Some(AccessGrant::VenueUnlock)
        } else {
            None
        };

        tracing::trace!(
            "Access {} -> {}: {:?}",
            viewer.member_id,
            target.member_id,
            grant
        );

        grant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rank::Rank;

    #[test]
    fn test_self_access() {
        let policy = VisibilityPolicy::new();
        let member = MemberProfile::new("m1", Rank::White, "shibuya");

        assert!(policy.can_view_detail(Some(&member), Some(&member)));
        assert_eq!(policy.access_grant(&member, &member), Some(AccessGrant::SelfAccess));
    }

    #[test]
    fn test_admin_sees_everyone() {
        let policy = VisibilityPolicy::new();
        let mut admin = MemberProfile::new("admin", Rank::White, "shibuya");
        admin.is_admin = Some(true);
        let target = MemberProfile::new("t", Rank::White, "umeda");

        assert_eq!(policy.access_grant(&admin, &target), Some(AccessGrant::Admin));
    }

    #[test]
    fn test_same_venue() {
        let policy = VisibilityPolicy::new();
        let viewer = MemberProfile::new("v", Rank::White, "shibuya");
        let target = MemberProfile::new("t", Rank::White, "shibuya");

        assert_eq!(policy.access_grant(&viewer, &target), Some(AccessGrant::SameVenue));
    }

    #[test]
    fn test_blank_venues_are_not_shared() {
        let policy = VisibilityPolicy::new();
        let viewer = MemberProfile::new("v", Rank::White, "");
        let target = MemberProfile::new("t", Rank::White, "");

        assert!(!policy.can_view_detail(Some(&viewer), Some(&target)));
    }

    #[test]
    fn test_rank_threshold() {
        let policy = VisibilityPolicy::new();
        let target = MemberProfile::new("t", Rank::White, "umeda");

        let silver = MemberProfile::new("v", Rank::Silver, "shibuya");
        assert_eq!(policy.access_grant(&silver, &target), None);

        let gold = MemberProfile::new("v", Rank::Gold, "shibuya");
        assert_eq!(policy.access_grant(&gold, &target), Some(AccessGrant::RankPrivilege));
    }

    #[test]
    fn test_venue_unlock() {
        let policy = VisibilityPolicy::new();
        let mut viewer = MemberProfile::new("v", Rank::Blue, "shibuya");
        viewer.unlocked_venues.push("umeda".to_string());
        let target = MemberProfile::new("t", Rank::White, "umeda");

        assert_eq!(policy.access_grant(&viewer, &target), Some(AccessGrant::VenueUnlock));
    }

    #[test]
    fn test_missing_side_denied() {
        let policy = VisibilityPolicy::new();
        let member = MemberProfile::new("m", Rank::Platinum, "shibuya");

        assert!(!policy.can_view_detail(None, Some(&member)));
        assert!(!policy.can_view_detail(Some(&member), None));
        assert!(!policy.can_message(None, Some(&member)));
        assert!(!policy.can_message(Some(&member), None));
    }

    #[test]
    fn test_message_follows_detail() {
        let policy = VisibilityPolicy::new();
        let viewer = MemberProfile::new("v", Rank::Blue, "shibuya");
        let near = MemberProfile::new("a", Rank::White, "shibuya");
        let far = MemberProfile::new("b", Rank::White, "tenjin");

        for target in [&near, &far] {
            assert_eq!(
                policy.can_message(Some(&viewer), Some(target)),
                policy.can_view_detail(Some(&viewer), Some(target))
            );
        }
    }
}
