//! Venture module - the case-study records managed by the admin panel.

pub mod catalog;
mod reactions;
mod record;

pub use reactions::{ReactionKind, Reactions};
pub use record::{NewVenture, Venture};
