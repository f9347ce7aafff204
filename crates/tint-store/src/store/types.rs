//! PaletteStore struct, snapshots, subscriptions, and the commit path.

use std::fmt;
use std::sync::Arc;

use tint_common::{PaletteId, StoreError};
use tracing::{debug, warn};

use crate::model::{Palette, StoreDefaults, StoreState};
use crate::persistence::Storage;

/// Handle returned by [`PaletteStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

pub(crate) type Subscriber = Box<dyn Fn(&StoreState) + Send + Sync>;

/// Single owner of the palette document.
///
/// Reads go through [`state`](Self::state), which returns a shared snapshot
/// that later edits never touch. Each successful mutation swaps in a new
/// snapshot, calls subscribers in registration order, then saves through
/// the attached storage. A failed mutation changes nothing and notifies no one.
pub struct PaletteStore {
    /// Current snapshot.
    pub(super) state: Arc<StoreState>,
    /// Parameters for new palettes and modes.
    pub(super) defaults: StoreDefaults,
    /// Registered callbacks, in registration order.
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    /// Auto-incrementing counter for subscription ids.
    next_subscription: u64,
    /// Where snapshots are saved after each mutation.
    storage: Option<Box<dyn Storage>>,
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(StoreDefaults::default())
    }
}

impl PaletteStore {
    pub fn new(defaults: StoreDefaults) -> Self {
        Self {
            state: Arc::new(StoreState::with_defaults(&defaults)),
            defaults,
            subscribers: Vec::new(),
            next_subscription: 1,
            storage: None,
        }
    }

    /// Attach a storage backend; every later mutation is saved through it.
    pub fn with_storage(mut self, storage: Box<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn state(&self) -> Arc<StoreState> {
        Arc::clone(&self.state)
    }

    pub fn defaults(&self) -> &StoreDefaults {
        &self.defaults
    }

    pub fn palette(&self, id: &PaletteId) -> Option<&Palette> {
        self.state.palette(id)
    }

    pub fn selected_palette(&self) -> Option<&Palette> {
        self.state.selected_palette()
    }

    pub fn palette_count(&self) -> usize {
        self.state.palettes.len()
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&StoreState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Replace the state with whatever the storage holds.
    ///
    /// Returns `Ok(true)` when a saved document was found. Subscribers are
    /// notified; the loaded state is not written straight back.
    pub fn load_from(&mut self, storage: &dyn Storage) -> Result<bool, StoreError> {
        match storage.load()? {
            Some(state) => {
                debug!(palettes = state.palettes.len(), "loaded store state");
                self.state = Arc::new(state);
                self.notify();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // -----------------------------------------------------------------------
    // Commit path
    // -----------------------------------------------------------------------

    /// Working copy of the current snapshot.
    pub(super) fn draft(&self) -> StoreState {
        (*self.state).clone()
    }

    /// Swap in `next`, notify subscribers, then persist.
    pub(super) fn commit(&mut self, next: StoreState, op: &'static str) {
        self.state = Arc::new(next);
        debug!(op, palettes = self.state.palettes.len(), "store updated");
        self.notify();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.save(&self.state) {
                warn!(op, "failed to persist store: {e}");
            }
        }
    }

    /// Apply `edit` to one palette of a draft and commit on success.
    pub(super) fn edit_palette<F>(
        &mut self,
        id: &PaletteId,
        op: &'static str,
        edit: F,
    ) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Palette, &StoreDefaults) -> Result<(), StoreError>,
    {
        let mut next = self.draft();
        let palette = next
            .palette_mut(id)
            .ok_or_else(|| StoreError::PaletteNotFound(id.to_string()))?;
        edit(palette, &self.defaults)?;
        self.commit(next, op);
        Ok(())
    }

    fn notify(&self) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
    }
}
