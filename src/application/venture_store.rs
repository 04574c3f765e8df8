//! VentureStore - the single source of truth for the venture collection and
//! the admin session.
//!
//! The store keeps the collection in memory and mirrors it in full to the
//! `admin_ventures` slot after every applied mutation. Mutations take
//! `&mut self`, so there is exactly one writer and every write completes
//! before the next operation starts.
//!
//! Operations addressed by id never fail when the id is unknown; they return
//! [`Mutation::NotFound`] and leave both memory and storage untouched.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::admin::{AdminSession, AUTH_FLAG_KEY, AUTH_FLAG_VALUE, AUTH_SINCE_KEY};
use crate::domain::analytics::{AnalyticsSnapshot, DEFAULT_TOP_N};
use crate::domain::foundation::{Timestamp, VentureId};
use crate::domain::venture::{catalog, NewVenture, ReactionKind, Venture};
use crate::ports::{CredentialVerifier, KeyValueStore, KeyValueStoreError};

/// Durable key holding the JSON snapshot of the whole collection.
pub const VENTURES_KEY: &str = "admin_ventures";

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] KeyValueStoreError),

    #[error("Failed to serialize ventures: {0}")]
    Serialization(String),

    #[error("Duplicate venture id in initial collection: {0}")]
    DuplicateId(VentureId),
}

/// Outcome of an id-addressed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Mutation {
    Applied,
    /// No venture has that id; nothing changed and nothing was written.
    NotFound,
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        *self == Mutation::Applied
    }
}

/// Tunables for a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Maximum age of an admin login. `None` trusts a persisted login forever.
    pub session_ttl: Option<Duration>,
    /// Ranking length used by [`VentureStore::analytics`].
    pub top_n: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            session_ttl: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

pub struct VentureStore {
    storage: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    ventures: Vec<Venture>,
    session: Option<AdminSession>,
    options: StoreOptions,
}

impl VentureStore {
    /// Opens the store, rehydrating from `storage`.
    ///
    /// A missing, unreadable, or corrupt saved collection is replaced by
    /// `defaults`; the chosen collection is then written back so storage and
    /// memory agree from the start.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if `defaults` repeats an id, or a
    /// storage error if the initial write fails.
    pub async fn open(
        storage: Arc<dyn KeyValueStore>,
        verifier: Arc<dyn CredentialVerifier>,
        defaults: Vec<Venture>,
        options: StoreOptions,
    ) -> Result<Self, StoreError> {
        if let Some(id) = catalog::first_duplicate_id(&defaults) {
            return Err(StoreError::DuplicateId(id.clone()));
        }

        let ventures = load_ventures(storage.as_ref(), defaults).await;
        let session = load_session(storage.as_ref(), options.session_ttl).await;

        let store = Self {
            storage,
            verifier,
            ventures,
            session,
            options,
        };
        store.persist().await?;

        info!(
            ventures = store.ventures.len(),
            authenticated = store.session.is_some(),
            "venture store opened"
        );
        Ok(store)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Admin gate
    // ─────────────────────────────────────────────────────────────────────

    /// Checks `credential`; on a match marks the admin as signed in and
    /// persists the flag. A mismatch returns `false` and changes nothing.
    pub async fn login(&mut self, credential: &str) -> Result<bool, StoreError> {
        if !self.verifier.verify(credential).await {
            warn!("admin login rejected");
            return Ok(false);
        }

        let now = Timestamp::now();
        self.session = Some(AdminSession::granted_at(now));
        self.storage.set(AUTH_FLAG_KEY, AUTH_FLAG_VALUE).await?;
        self.storage.set(AUTH_SINCE_KEY, &now.to_rfc3339()).await?;

        info!("admin logged in");
        Ok(true)
    }

    /// Signs the admin out and forgets the persisted flag.
    pub async fn logout(&mut self) -> Result<(), StoreError> {
        self.session = None;
        self.storage.remove(AUTH_FLAG_KEY).await?;
        self.storage.remove(AUTH_SINCE_KEY).await?;
        info!("admin logged out");
        Ok(())
    }

    /// Whether an admin session exists and has not outlived the TTL.
    pub fn is_authenticated(&self) -> bool {
        self.session
            .is_some_and(|s| s.is_valid_at(Timestamp::now(), self.options.session_ttl))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Collection mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a new venture with a fresh id and zeroed counters.
    ///
    /// Fields are stored as given; see [`NewVenture::validate`] for
    /// form-level checks.
    pub async fn add_venture(&mut self, fields: NewVenture) -> Result<VentureId, StoreError> {
        let id = self.fresh_id();
        self.ventures.push(Venture::create(id.clone(), fields));
        self.persist().await?;

        debug!(venture_id = %id, "venture added");
        Ok(id)
    }

    /// Replaces the venture with the same id by `venture`, counters included.
    pub async fn update_venture(&mut self, venture: Venture) -> Result<Mutation, StoreError> {
        let id = venture.id.clone();
        self.modify(&id, "update", move |existing| *existing = venture)
            .await
    }

    /// Replaces the editable fields of a venture, keeping its id, views and
    /// reactions.
    pub async fn edit_venture(
        &mut self,
        id: &VentureId,
        fields: NewVenture,
    ) -> Result<Mutation, StoreError> {
        self.modify(id, "edit", move |existing| existing.apply(fields))
            .await
    }

    pub async fn delete_venture(&mut self, id: &VentureId) -> Result<Mutation, StoreError> {
        let Some(index) = self.position(id) else {
            warn!(venture_id = %id, operation = "delete", "venture not found");
            return Ok(Mutation::NotFound);
        };

        self.ventures.remove(index);
        self.persist().await?;

        debug!(venture_id = %id, "venture deleted");
        Ok(Mutation::Applied)
    }

    /// Adds exactly one view.
    pub async fn increment_views(&mut self, id: &VentureId) -> Result<Mutation, StoreError> {
        self.modify(id, "view", Venture::record_view).await
    }

    /// Adds exactly one reaction of `kind`; the other counters are untouched.
    pub async fn update_venture_reaction(
        &mut self,
        id: &VentureId,
        kind: ReactionKind,
    ) -> Result<Mutation, StoreError> {
        self.modify(id, "react", move |venture| venture.record_reaction(kind))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    /// Current snapshot in insertion order.
    pub fn ventures(&self) -> &[Venture] {
        &self.ventures
    }

    pub fn get(&self, id: &VentureId) -> Option<&Venture> {
        catalog::find(&self.ventures, id)
    }

    pub fn len(&self) -> usize {
        self.ventures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ventures.is_empty()
    }

    /// Dashboard aggregates over the current snapshot.
    pub fn analytics(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot::compute(&self.ventures, self.options.top_n)
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    fn position(&self, id: &VentureId) -> Option<usize> {
        self.ventures.iter().position(|v| &v.id == id)
    }

    fn fresh_id(&self) -> VentureId {
        loop {
            let id = VentureId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    async fn modify<F>(
        &mut self,
        id: &VentureId,
        operation: &'static str,
        apply: F,
    ) -> Result<Mutation, StoreError>
    where
        F: FnOnce(&mut Venture),
    {
        let Some(index) = self.position(id) else {
            warn!(venture_id = %id, operation, "venture not found");
            return Ok(Mutation::NotFound);
        };

        apply(&mut self.ventures[index]);
        self.persist().await?;

        debug!(venture_id = %id, operation, "venture modified");
        Ok(Mutation::Applied)
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.ventures)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.storage.set(VENTURES_KEY, &json).await?;
        Ok(())
    }
}

async fn load_ventures(storage: &dyn KeyValueStore, defaults: Vec<Venture>) -> Vec<Venture> {
    let raw = match storage.get(VENTURES_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return defaults,
        Err(e) => {
            warn!(error = %e, "could not read saved ventures, using defaults");
            return defaults;
        }
    };

    let saved: Vec<Venture> = match serde_json::from_str(&raw) {
        Ok(saved) => saved,
        Err(e) => {
            warn!(error = %e, "saved ventures are corrupt, using defaults");
            return defaults;
        }
    };

    let duplicate = catalog::first_duplicate_id(&saved).cloned();
    match duplicate {
        Some(id) => {
            warn!(venture_id = %id, "saved ventures repeat an id, using defaults");
            defaults
        }
        None => saved,
    }
}

async fn load_session(storage: &dyn KeyValueStore, ttl: Option<Duration>) -> Option<AdminSession> {
    let flag = read_or_warn(storage, AUTH_FLAG_KEY).await;
    let since = read_or_warn(storage, AUTH_SINCE_KEY).await;
    let session = AdminSession::rehydrate(flag.as_deref(), since.as_deref())?;

    if session.is_valid_at(Timestamp::now(), ttl) {
        return Some(session);
    }

    info!("persisted admin session expired");
    for key in [AUTH_FLAG_KEY, AUTH_SINCE_KEY] {
        if let Err(e) = storage.remove(key).await {
            warn!(error = %e, key, "could not clear expired admin session");
        }
    }
    None
}

async fn read_or_warn(storage: &dyn KeyValueStore, key: &str) -> Option<String> {
    match storage.get(key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, key, "could not read admin session key");
            None
        }
    }
}
