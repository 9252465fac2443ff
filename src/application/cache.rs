//! Optimistic entity cache.
//!
//! Keeps an in-memory, sorted list of one entity type synchronized with the
//! remote row store. Updates and deletes apply to local state immediately
//! and reconcile when the remote call resolves: the server row replaces the
//! optimistic copy on success, the pre-mutation snapshot comes back on
//! failure. Creates are never optimistic because the server assigns the id.
//!
//! One cache instance per entity type is shared by every reader; consumers
//! receive an explicit `Arc` reference rather than looking the cache up
//! ambiently. Concurrent mutations on the same id are rejected up front
//! with [`CacheError::MutationInFlight`] instead of being allowed to race.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::sort::SortKey;
use crate::domain::{Course, RunningRecord, RunningTrack};
use crate::error::{CacheError, Error, Result};
use crate::port::outbound::store::{Entity, EntityGateway};

/// A mutation between optimistic apply and reconciliation.
///
/// An entry in the pending map *is* the `Pending(snapshot)` state; confirmed
/// and rolled-back are terminal, so reconciliation removes the entry while
/// fixing up the list under the same lock.
enum Pending<E> {
    /// Patch applied locally; snapshot restores it on failure.
    Update { snapshot: E },
    /// Entity spliced out locally; snapshot reinserts it on failure.
    Delete { snapshot: E },
}

struct CacheState<E: Entity> {
    items: Vec<E>,
    sort_key: SortKey,
    pending: HashMap<E::Id, Pending<E>>,
    loading: bool,
    last_error: Option<String>,
}

/// Shared optimistic cache for one entity type.
pub struct EntityCache<E: Entity> {
    gateway: Arc<dyn EntityGateway<E>>,
    state: RwLock<CacheState<E>>,
}

/// Course cache: the page-scoped shared instance for course views.
pub type CourseCache = EntityCache<Course>;
/// Running-record cache.
pub type RecordCache = EntityCache<RunningRecord>;
/// Playlist cache.
pub type MusicCache = EntityCache<RunningTrack>;

impl<E: Entity> EntityCache<E> {
    /// Create an empty cache over a gateway, with the default sort key.
    pub fn new(gateway: Arc<dyn EntityGateway<E>>) -> Self {
        Self::with_sort_key(gateway, SortKey::default())
    }

    pub fn with_sort_key(gateway: Arc<dyn EntityGateway<E>>, sort_key: SortKey) -> Self {
        Self {
            gateway,
            state: RwLock::new(CacheState {
                items: Vec::new(),
                sort_key,
                pending: HashMap::new(),
                loading: false,
                last_error: None,
            }),
        }
    }

    /// Re-fetch the full list with the active sort key.
    pub async fn refresh(&self) -> Result<()> {
        let key = {
            let mut state = self.state.write();
            state.loading = true;
            state.sort_key
        };

        let result = self.gateway.fetch_all(key).await;

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(mut rows) => {
                // Enforce the sorted-list invariant with the client
                // comparator even if server collation differs.
                key.sort(&mut rows);
                state.items = rows;
                Ok(())
            }
            Err(err) => Err(Self::record_failure(&mut state, err)),
        }
    }

    /// Switch the active sort key.
    ///
    /// This re-fetches from the gateway under the new order rather than
    /// re-sorting in memory. If the fetch fails, the previous key and list
    /// are kept and the error is surfaced.
    pub async fn set_sort_key(&self, key: SortKey) -> Result<()> {
        {
            let mut state = self.state.write();
            state.loading = true;
        }

        let result = self.gateway.fetch_all(key).await;

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(mut rows) => {
                key.sort(&mut rows);
                state.sort_key = key;
                state.items = rows;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "sort-key switch fetch failed; keeping previous order");
                Err(Self::record_failure(&mut state, err))
            }
        }
    }

    /// Create an entity.
    ///
    /// No optimistic placeholder is shown: the id is server-assigned, so the
    /// row joins the list only after the insert is confirmed.
    pub async fn create(&self, draft: E::Draft) -> Result<E> {
        match self.gateway.insert(draft).await {
            Ok(row) => {
                let mut state = self.state.write();
                state.items.push(row.clone());
                let key = state.sort_key;
                key.sort(&mut state.items);
                debug!(id = %row.id(), "create confirmed");
                Ok(row)
            }
            Err(err) => {
                let mut state = self.state.write();
                Err(Self::record_failure(&mut state, err))
            }
        }
    }

    /// Update an entity, optimistically.
    ///
    /// The patch is merged into the local copy before the remote call is
    /// issued, so reads observe the new value immediately. On confirmation
    /// the server row replaces the local copy and the list is re-sorted; on
    /// failure the pre-mutation snapshot is restored field for field.
    pub async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<E> {
        {
            let mut state = self.state.write();
            Self::ensure_idle(&state, id)?;
            let item = state
                .items
                .iter_mut()
                .find(|e| e.id() == id)
                .ok_or_else(|| CacheError::UnknownId { id: id.to_string() })?;
            let snapshot = item.clone();
            item.apply_patch(&patch);
            state.pending.insert(id.clone(), Pending::Update { snapshot });
        }

        let result = self.gateway.update(id, patch).await;

        let mut state = self.state.write();
        let pending = state.pending.remove(id);
        match result {
            Ok(row) => {
                Self::put(&mut state, row.clone());
                debug!(%id, "update confirmed");
                Ok(row)
            }
            Err(err) => {
                if let Some(Pending::Update { snapshot }) = pending {
                    warn!(%id, error = %err, "update failed; rolling back");
                    Self::put(&mut state, snapshot);
                }
                Err(Self::record_failure(&mut state, err))
            }
        }
    }

    /// Delete an entity, optimistically.
    ///
    /// The entity is spliced out before the remote call; a failed delete
    /// reinserts it at the end of the list and re-sorts.
    pub async fn remove(&self, id: &E::Id) -> Result<()> {
        {
            let mut state = self.state.write();
            Self::ensure_idle(&state, id)?;
            let position = state
                .items
                .iter()
                .position(|e| e.id() == id)
                .ok_or_else(|| CacheError::UnknownId { id: id.to_string() })?;
            let snapshot = state.items.remove(position);
            state.pending.insert(id.clone(), Pending::Delete { snapshot });
        }

        let result = self.gateway.delete(id).await;

        let mut state = self.state.write();
        let pending = state.pending.remove(id);
        match result {
            Ok(()) => {
                debug!(%id, "delete confirmed");
                Ok(())
            }
            Err(err) => {
                if let Some(Pending::Delete { snapshot }) = pending {
                    warn!(%id, error = %err, "delete failed; restoring entity");
                    state.items.push(snapshot);
                    let key = state.sort_key;
                    key.sort(&mut state.items);
                }
                Err(Self::record_failure(&mut state, err))
            }
        }
    }

    /// Snapshot of the current list, including optimistic state.
    #[must_use]
    pub fn entities(&self) -> Vec<E> {
        self.state.read().items.clone()
    }

    /// The current local view of one entity, including optimistic state.
    #[must_use]
    pub fn get_by_id(&self, id: &E::Id) -> Option<E> {
        self.state.read().items.iter().find(|e| e.id() == id).cloned()
    }

    /// Ids with a mutation in flight, derived from the pending map.
    #[must_use]
    pub fn busy_ids(&self) -> Vec<E::Id> {
        self.state.read().pending.keys().cloned().collect()
    }

    #[must_use]
    pub fn is_busy(&self, id: &E::Id) -> bool {
        self.state.read().pending.contains_key(id)
    }

    /// True while a fetch (refresh or sort-key switch) is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.state.read().sort_key
    }

    /// The most recent failure message, last-error-wins.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_idle(state: &CacheState<E>, id: &E::Id) -> Result<()> {
        if state.pending.contains_key(id) {
            return Err(CacheError::MutationInFlight { id: id.to_string() }.into());
        }
        Ok(())
    }

    /// Replace the row with the same id (or append) and re-sort.
    fn put(state: &mut CacheState<E>, row: E) {
        match state.items.iter_mut().find(|e| e.id() == row.id()) {
            Some(slot) => *slot = row,
            None => state.items.push(row),
        }
        let key = state.sort_key;
        key.sort(&mut state.items);
    }

    fn record_failure(state: &mut CacheState<E>, err: Error) -> Error {
        state.last_error = Some(err.to_string());
        err
    }
}
