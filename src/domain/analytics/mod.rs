//! Derived analytics over the venture collection.
//!
//! Read-only, side-effect-free views used by the admin dashboard.

pub mod aggregates;
mod snapshot;

pub use aggregates::ReactionShare;
pub use snapshot::{AnalyticsSnapshot, VentureSummary, DEFAULT_TOP_N};
