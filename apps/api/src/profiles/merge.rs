//! Partial profile updates.
//!
//! A request body is a JSON object holding any subset of the profile's fields.
//! Keys present in the body replace the stored value; absent keys are kept.

use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::models::user::User;

/// Fields owned by the server. Client values for them are ignored.
const PROTECTED_FIELDS: [&str; 5] = ["id", "applicantEmail", "applicantId", "createdAt", "lastUpdated"];

/// Overlays `update` onto `existing`, or onto a fresh profile for `owner`.
pub fn merge_profile(
    existing: Option<UserProfile>,
    owner: &User,
    update: Value,
) -> Result<UserProfile, AppError> {
    let Value::Object(mut update) = update else {
        return Err(AppError::Validation(
            "Profile body must be a JSON object".to_string(),
        ));
    };
    normalize_skills(&mut update);

    let now = Utc::now();
    let base = existing.unwrap_or_else(|| UserProfile {
        id: Uuid::new_v4(),
        applicant_email: owner.email.clone(),
        applicant_id: Some(owner.id),
        created_at: now,
        ..Default::default()
    });

    let Value::Object(mut fields) = serde_json::to_value(&base)
        .map_err(|e| AppError::Validation(format!("Invalid profile: {e}")))?
    else {
        return Err(AppError::Validation("Invalid profile".to_string()));
    };
    for (key, value) in update {
        if !PROTECTED_FIELDS.contains(&key.as_str()) {
            fields.insert(key, value);
        }
    }

    let mut merged: UserProfile = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::Validation(format!("Invalid profile: {e}")))?;
    merged.last_updated = now;
    Ok(merged)
}

/// Older clients send skills as one comma-separated string.
fn normalize_skills(update: &mut Map<String, Value>) {
    if let Some(Value::String(raw)) = update.get("skills") {
        let skills: Vec<Value> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Value::String(s.to_string()))
            .collect();
        update.insert("skills".to_string(), Value::Array(skills));
    }
}
