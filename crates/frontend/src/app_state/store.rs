use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::state::AppState;

/// Holder of the single [`AppState`].
///
/// Both methods return `None` once the backing storage is gone (a disposed
/// signal after the owning component unmounted).
pub trait AppStore {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R>;
}

/// Reactive store used by the views
impl AppStore for RwSignal<AppState> {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl AppStore for Rc<RefCell<AppState>> {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        Some(f(&RefCell::borrow(self)))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        Some(f(&mut RefCell::borrow_mut(self)))
    }
}

/// Clears the busy flag when dropped, whatever way the action ended
pub struct BusyGuard<'a, St: AppStore> {
    store: &'a St,
    epoch: u64,
}

impl<'a, St: AppStore> BusyGuard<'a, St> {
    /// `None` when another operation is already in flight
    pub fn acquire(store: &'a St) -> Option<Self> {
        let epoch = store
            .update_state(|s| s.begin().then_some(s.session_epoch))
            .flatten()?;
        Some(Self { store, epoch })
    }

    /// `false` once the session the operation started in has ended
    pub fn is_current(&self) -> bool {
        self.store
            .with_state(|s| s.session_epoch == self.epoch)
            .unwrap_or(false)
    }
}

impl<St: AppStore> Drop for BusyGuard<'_, St> {
    fn drop(&mut self) {
        let _ = self.store.update_state(AppState::finish);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_guard_releases_on_drop() {
        let store = Rc::new(RefCell::new(AppState::default()));
        {
            let guard = BusyGuard::acquire(&store);
            assert!(guard.is_some());
            assert!(store.with_state(|s| s.busy).unwrap());
            assert!(BusyGuard::acquire(&store).is_none());
        }
        assert!(!store.with_state(|s| s.busy).unwrap());
        assert!(BusyGuard::acquire(&store).is_some());
    }

    #[test]
    fn test_busy_guard_goes_stale_on_session_end() {
        let store = Rc::new(RefCell::new(AppState::default()));
        let guard = BusyGuard::acquire(&store).unwrap();
        assert!(guard.is_current());

        store.update_state(AppState::clear_session_data);
        assert!(!guard.is_current());
        drop(guard);
        assert!(!store.with_state(|s| s.busy).unwrap());
    }
}
