//! Pages
//!
//! Top-level page components for each route.

pub mod activities;
pub mod dashboard;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

pub use activities::Activities;
pub use dashboard::Dashboard;
pub use leaderboard::Leaderboard;
pub use teams::Teams;
pub use users::Users;
pub use workouts::Workouts;
