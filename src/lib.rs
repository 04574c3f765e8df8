//! Venture Journal - admin state for a catalog of failed-venture case studies
//!
//! This crate keeps the venture collection and the admin sign-in flag,
//! mirrors both into a durable key-value store, and computes the analytics
//! dashboard from the current collection.
//!
//! # Example
//!
//! ```no_run
//! use venture_journal::application::VentureStore;
//! use venture_journal::config::AppConfig;
//! use venture_journal::domain::venture::{NewVenture, ReactionKind};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! venture_journal::telemetry::init_tracing(&config.logging)?;
//!
//! let mut store = VentureStore::open(
//!     config.storage.build(),
//!     Arc::new(config.admin.verifier()),
//!     Vec::new(),
//!     config.store_options(),
//! )
//! .await?;
//!
//! let id = store.add_venture(NewVenture::new("Ship smaller", "Widgetly", 2019)).await?;
//! let _ = store.update_venture_reaction(&id, ReactionKind::Thinking).await?;
//! println!("{} reactions", store.analytics().total_reactions);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
