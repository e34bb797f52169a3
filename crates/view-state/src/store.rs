use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::state::{ModeAction, ModeState};

/// Shared, copy-on-write holder of the current [`ModeState`].
///
/// Readers clone an `Arc` snapshot and never block each other; `dispatch`
/// holds the write lock while reducing, so writes are applied one at a time.
/// The revision only advances when a dispatch changes the state, which lets
/// callers drop results memoized for an older revision.
#[derive(Debug, Default)]
pub struct ModeStore {
    state: RwLock<Arc<ModeState>>,
    revision: AtomicU64,
}

impl ModeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ModeState) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            revision: AtomicU64::new(0),
        }
    }

    /// Current state; stays valid after later dispatches
    pub fn snapshot(&self) -> Arc<ModeState> {
        // Snapshots are replaced whole, so a poisoned lock still holds a
        // complete state.
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Reduces `action` into the stored state and returns the new snapshot.
    pub fn dispatch(&self, action: &ModeAction) -> Arc<ModeState> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.reduce(action);

        if next != **guard {
            *guard = Arc::new(next);
            let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;
            log::debug!("mode state revision {revision} after {action:?}");
        }

        Arc::clone(&guard)
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }
}
