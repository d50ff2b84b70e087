//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod edit_user;
pub mod loading;
pub mod nav;
pub mod stat_card;

pub use edit_user::EditUserModal;
pub use loading::{EmptyState, ErrorCard, Loading};
pub use nav::Nav;
pub use stat_card::StatCard;
