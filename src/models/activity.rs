// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// Stored activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client-app/src/app/models/generated/")
)]
pub struct Activity {
    /// Caller-assigned identifier (also the primary key)
    pub id: Uuid,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    /// Local start time (ISO 8601, no offset)
    pub date: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "venue must not be empty"))]
    pub venue: String,
}

/// Partial update for an activity.
///
/// `None` means "keep the stored value"; `Some` replaces it wholesale,
/// including `Some(String::new())`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client-app/src/app/models/generated/")
)]
pub struct ActivityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl ActivityPatch {
    /// Overwrite the fields carried by this patch, leaving the rest untouched.
    pub fn apply(self, activity: &mut Activity) {
        if let Some(title) = self.title {
            activity.title = title;
        }
        if let Some(category) = self.category {
            activity.category = category;
        }
        if let Some(description) = self.description {
            activity.description = description;
        }
        if let Some(date) = self.date {
            activity.date = date;
        }
        if let Some(city) = self.city {
            activity.city = city;
        }
        if let Some(venue) = self.venue {
            activity.venue = venue;
        }
    }
}

/// A full activity as a patch: every field is carried.
impl From<Activity> for ActivityPatch {
    fn from(activity: Activity) -> Self {
        Self {
            title: Some(activity.title),
            category: Some(activity.category),
            description: Some(activity.description),
            date: Some(activity.date),
            city: Some(activity.city),
            venue: Some(activity.venue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Activity {
        Activity {
            id: Uuid::from_u128(1),
            title: "Past Activity 1".to_string(),
            category: "drinks".to_string(),
            description: "Activity 2 months ago".to_string(),
            date: "2020-01-02T10:00:00".to_string(),
            city: "London".to_string(),
            venue: "Pub".to_string(),
        }
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let mut activity = sample();
        let patch = ActivityPatch {
            title: Some("New".to_string()),
            ..Default::default()
        };

        patch.apply(&mut activity);

        assert_eq!(activity.title, "New");
        assert_eq!(activity.city, "London");
        assert_eq!(activity.date, "2020-01-02T10:00:00");
    }

    #[test]
    fn test_patch_present_empty_value_replaces() {
        let mut activity = sample();
        let patch = ActivityPatch {
            venue: Some(String::new()),
            ..Default::default()
        };

        patch.apply(&mut activity);

        assert_eq!(activity.venue, "");
        assert_eq!(activity.title, "Past Activity 1");
    }

    #[test]
    fn test_patch_deserializes_missing_and_null_as_absent() {
        let patch: ActivityPatch =
            serde_json::from_str(r#"{"title":"New","city":null}"#).unwrap();

        assert_eq!(patch.title.as_deref(), Some("New"));
        assert!(patch.city.is_none());
        assert!(patch.venue.is_none());
    }

    #[test]
    fn test_full_activity_patch_is_identity() {
        let original = sample();
        let mut target = Activity {
            title: "Stale".to_string(),
            ..sample()
        };

        ActivityPatch::from(original.clone()).apply(&mut target);

        assert_eq!(target, original);
    }

    #[test]
    fn test_validation_rejects_empty_title() {
        let activity = Activity {
            title: String::new(),
            ..sample()
        };
        assert!(activity.validate().is_err());
        assert!(sample().validate().is_ok());
    }
}
