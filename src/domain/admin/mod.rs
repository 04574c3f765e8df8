//! Admin module - the gate in front of the content-management operations.

mod session;

pub use session::{AdminSession, AUTH_FLAG_KEY, AUTH_FLAG_VALUE, AUTH_SINCE_KEY};
