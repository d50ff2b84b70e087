//! REST API Layer
//!
//! Typed entities and the HTTP client used by every page.

pub mod client;
pub mod types;

pub use client::{
    fetch_activities, fetch_dashboard, fetch_leaderboard, fetch_teams, fetch_users,
    fetch_workouts, get_api_base, update_user, DashboardData,
};
pub use types::{Activity, LeaderboardEntry, Team, User, UserUpdate, Workout};
