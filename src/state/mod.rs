//! State Management
//!
//! Per-view fetch lifecycle. Views do not share state; each holds its own
//! snapshot of fetched data in local signals.

pub mod fetch;

pub use fetch::FetchState;
