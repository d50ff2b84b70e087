//! HTTP API Client
//!
//! Functions for communicating with the OctoFit REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::api::types::{Activity, LeaderboardEntry, Team, User, UserUpdate, Workout};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("octofit_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Log an unexpected-shape diagnostic (console is wasm-only; tests run on
/// the host)
fn warn_shape(context: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("Unexpected response shape: {}", context).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = context;
}

/// Coerce an API payload into a collection.
///
/// The server returns either a bare array or a paginated envelope with a
/// `results` array. Anything else degrades to an empty collection, and a
/// record that fails to decode is skipped rather than failing the whole
/// list.
pub fn normalize_collection<T: DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                warn_shape("object without a results array");
                return Vec::new();
            }
        },
        _ => {
            warn_shape("non-collection payload");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(_) => {
                warn_shape("undecodable record");
                None
            }
        })
        .collect()
}

/// Fetch a resource collection from the API
async fn fetch_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}{}", api_base, path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: status {}", response.status()));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(normalize_collection(payload))
}

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, String> {
    fetch_collection("/users/").await
}

/// Fetch all teams
pub async fn fetch_teams() -> Result<Vec<Team>, String> {
    fetch_collection("/teams/").await
}

/// Fetch all activities
pub async fn fetch_activities() -> Result<Vec<Activity>, String> {
    fetch_collection("/activities/").await
}

/// Fetch all workout suggestions
pub async fn fetch_workouts() -> Result<Vec<Workout>, String> {
    fetch_collection("/workouts/").await
}

/// Fetch the leaderboard (pre-sorted by the server)
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, String> {
    fetch_collection("/leaderboard/").await
}

/// Everything the dashboard needs in one fetch
#[derive(Clone, Debug)]
pub struct DashboardData {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub activities: Vec<Activity>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Fetch the four dashboard collections concurrently.
///
/// All-or-nothing: a single failed fetch fails the whole aggregate.
pub async fn fetch_dashboard() -> Result<DashboardData, String> {
    let (users, teams, activities, leaderboard) = futures::join!(
        fetch_users(),
        fetch_teams(),
        fetch_activities(),
        fetch_leaderboard(),
    );

    Ok(DashboardData {
        users: users?,
        teams: teams?,
        activities: activities?,
        leaderboard: leaderboard?,
    })
}

/// Update a user with a partial record, returning the server's updated
/// representation
pub async fn update_user(id: &str, update: &UserUpdate) -> Result<User, String> {
    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/users/{}/", api_base, id))
        .json(update)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::User;
    use serde_json::json;

    #[test]
    fn test_normalize_bare_array() {
        let payload = json!([
            {"id": "1", "name": "Alice"},
            {"id": "2", "name": "Bob"},
        ]);
        let users: Vec<User> = normalize_collection(payload);
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Alice");
    }

    #[test]
    fn test_normalize_paginated_envelope() {
        let payload = json!({
            "count": 1,
            "next": null,
            "results": [{"id": "1", "name": "Alice"}],
        });
        let users: Vec<User> = normalize_collection(payload);
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_normalize_unexpected_shapes_degrade_to_empty() {
        for payload in [
            json!({"detail": "not found"}),
            json!("oops"),
            json!(42),
            json!(null),
        ] {
            let users: Vec<User> = normalize_collection(payload);
            assert!(users.is_empty());
        }
    }

    #[test]
    fn test_normalize_skips_undecodable_records() {
        let payload = json!([
            {"id": "1", "name": "Alice"},
            "not a record",
            {"id": "2", "name": "Bob"},
        ]);
        let users: Vec<User> = normalize_collection(payload);
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Bob");
    }
}
