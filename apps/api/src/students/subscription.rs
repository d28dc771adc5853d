use serde::{Deserialize, Serialize};

use crate::models::user::SubscriptionTier;

/// Feature flags shown to industry users. Every flag is on for every tier;
/// the tier is reported but does not restrict anything.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub view_full_resume: bool,
    pub download_resume: bool,
    pub view_contact_details: bool,
    pub shortlist_candidates: bool,
    pub unlimited_access: bool,
}

pub fn features_for(_tier: SubscriptionTier) -> FeatureFlags {
    FeatureFlags {
        view_full_resume: true,
        download_resume: true,
        view_contact_details: true,
        shortlist_candidates: true,
        unlimited_access: true,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInfo {
    pub subscription_type: SubscriptionTier,
    pub is_paid_user: bool,
    pub features: FeatureFlags,
}

impl SubscriptionInfo {
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        Self {
            subscription_type: tier,
            is_paid_user: tier == SubscriptionTier::Paid,
            features: features_for(tier),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdateRequest {
    pub subscription_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_tier_has_every_feature() {
        let info = SubscriptionInfo::for_tier(SubscriptionTier::Free);
        assert!(!info.is_paid_user);
        let f = info.features;
        assert!(f.view_full_resume && f.download_resume && f.view_contact_details);
        assert!(f.shortlist_candidates && f.unlimited_access);
    }

    #[test]
    fn test_paid_flag() {
        let json = serde_json::to_value(SubscriptionInfo::for_tier(SubscriptionTier::Paid)).unwrap();
        assert_eq!(json["subscriptionType"], "PAID");
        assert_eq!(json["isPaidUser"], true);
    }
}
