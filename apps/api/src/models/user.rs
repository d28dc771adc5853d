use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Applicant,
    Industry,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Applicant => "APPLICANT",
            UserType::Industry => "INDUSTRY",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "APPLICANT" => Some(UserType::Applicant),
            "INDUSTRY" => Some(UserType::Industry),
            _ => None,
        }
    }
}

/// Industry subscription tier. Recorded and reported, but it gates nothing:
/// every feature is available on both tiers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Paid,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "FREE",
            SubscriptionTier::Paid => "PAID",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "FREE" => Some(SubscriptionTier::Free),
            "PAID" => Some(SubscriptionTier::Paid),
            _ => None,
        }
    }
}

/// Domain user resolved from the authenticated session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub picture_url: Option<String>,
    pub user_type: UserType,
    pub subscription_tier: SubscriptionTier,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub picture_url: Option<String>,
    pub user_type: String,
    pub subscription_type: Option<String>,
}

impl UserRow {
    /// Returns `None` when `user_type` holds an unknown role.
    /// A missing or unknown subscription reads as FREE.
    pub fn into_user(self) -> Option<User> {
        let user_type = UserType::parse(&self.user_type)?;
        let subscription_tier = self
            .subscription_type
            .as_deref()
            .and_then(SubscriptionTier::parse)
            .unwrap_or_default();
        Some(User {
            id: self.id,
            name: self.name,
            email: self.email,
            picture_url: self.picture_url,
            user_type,
            subscription_tier,
        })
    }
}
