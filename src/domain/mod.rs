//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `venture` - Venture records, reactions, and catalog orderings
//! - `analytics` - Pure aggregates for the admin dashboard
//! - `admin` - Admin session state and its durable keys

pub mod admin;
pub mod analytics;
pub mod foundation;
pub mod venture;
