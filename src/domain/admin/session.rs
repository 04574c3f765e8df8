//! Admin session - the authenticated flag and when it was granted.

use std::time::Duration;

use crate::domain::foundation::Timestamp;

/// Durable key holding the literal `"true"` while an admin is signed in.
pub const AUTH_FLAG_KEY: &str = "admin_authenticated";

/// Durable key holding the RFC 3339 login time.
pub const AUTH_SINCE_KEY: &str = "admin_authenticated_at";

/// Value written under [`AUTH_FLAG_KEY`].
pub const AUTH_FLAG_VALUE: &str = "true";

/// A granted admin session.
///
/// `authenticated_at` is `None` for sessions rehydrated from a bare flag
/// written before login times were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession {
    authenticated_at: Option<Timestamp>,
}

impl AdminSession {
    /// Session granted at `now` by a successful credential check.
    pub fn granted_at(now: Timestamp) -> Self {
        Self {
            authenticated_at: Some(now),
        }
    }

    /// Rebuilds a session from the persisted flag and login time.
    ///
    /// Anything other than the exact flag value means signed out. An
    /// unparseable login time is treated as unknown.
    pub fn rehydrate(flag: Option<&str>, since: Option<&str>) -> Option<Self> {
        if flag != Some(AUTH_FLAG_VALUE) {
            return None;
        }
        let authenticated_at = since.and_then(|raw| Timestamp::parse_rfc3339(raw).ok());
        Some(Self { authenticated_at })
    }

    pub fn authenticated_at(&self) -> Option<Timestamp> {
        self.authenticated_at
    }

    /// Whether the session is still good at `now`.
    ///
    /// Without a TTL the flag is trusted indefinitely. With one, a session of
    /// unknown age is expired.
    pub fn is_valid_at(&self, now: Timestamp, ttl: Option<Duration>) -> bool {
        let Some(ttl) = ttl else {
            return true;
        };
        match self.authenticated_at {
            Some(since) => !now.is_after(&since.plus_secs(ttl.as_secs())),
            None => false,
        }
    }
}
