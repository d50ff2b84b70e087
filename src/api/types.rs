//! API Entity Types
//!
//! Typed mirrors of the OctoFit REST API records. The backend is
//! Mongo-backed, so ids arrive as `_id` strings; every field the server
//! may omit or null out is optional with a serde default so a sparse
//! record never fails to decode.

use serde::{Deserialize, Serialize};

/// An athlete registered on the platform
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "username")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub fitness_goal: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    /// Accumulated points, treating missing as zero
    pub fn points(&self) -> u32 {
        self.points.unwrap_or(0)
    }

    /// Team label, preferring the resolved name over the raw reference
    pub fn team_display(&self) -> Option<&str> {
        self.team_name
            .as_deref()
            .or(self.team.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// A team competing on the platform
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Team {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A logged activity session
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Activity {
    /// Athlete label, preferring the resolved name over the raw reference
    pub fn user_display(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.user.as_deref())
            .unwrap_or("Unknown")
    }
}

/// A suggested workout
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Workout {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// A ranked leaderboard row, pre-sorted by the server
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub total_points: Option<u32>,
}

impl LeaderboardEntry {
    pub fn points(&self) -> u32 {
        self.total_points.unwrap_or(0)
    }

    pub fn user_display(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.user.as_deref())
            .unwrap_or("?")
    }

    pub fn team_display(&self) -> &str {
        self.team_name
            .as_deref()
            .or(self.team.as_deref())
            .unwrap_or("")
    }
}

/// PATCH body for `/api/users/{id}/`
///
/// Text fields go through as-is; absent numerics serialize as explicit
/// null so the server clears them rather than keeping stale values.
#[derive(Clone, Debug, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub team: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<i64>,
    pub gender: String,
    pub fitness_goal: String,
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_mongo_id_and_sparse_fields() {
        let user: User =
            serde_json::from_str(r#"{"_id": "abc123", "name": "Alice"}"#).unwrap();
        assert_eq!(user.id, "abc123");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.points(), 0);
        assert_eq!(user.team_display(), None);
    }

    #[test]
    fn test_user_team_display_prefers_resolved_name() {
        let user: User = serde_json::from_str(
            r#"{"id": "1", "name": "Bob", "team": "t1", "team_name": "Blue Team"}"#,
        )
        .unwrap();
        assert_eq!(user.team_display(), Some("Blue Team"));
    }

    #[test]
    fn test_leaderboard_entry_falls_back_to_raw_user_reference() {
        let entry: LeaderboardEntry =
            serde_json::from_str(r#"{"user": "A", "total_points": 1200}"#).unwrap();
        assert_eq!(entry.user_display(), "A");
        assert_eq!(entry.points(), 1200);
    }

    #[test]
    fn test_user_update_serializes_absent_numerics_as_null() {
        let update = UserUpdate {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            team: String::new(),
            weight: None,
            height: Some(175.0),
            age: None,
            gender: String::new(),
            fitness_goal: String::new(),
            bio: String::new(),
        };
        let body = serde_json::to_value(&update).unwrap();
        assert!(body["weight"].is_null());
        assert!(body["age"].is_null());
        assert_eq!(body["height"], serde_json::json!(175.0));
    }
}
