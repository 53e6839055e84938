//! Observable value cells for presentation outputs.
//!
//! [`MutableState`] is the writer side, [`State`] the read-only view handed
//! to observers. Watchers fire synchronously on every `set`; they must not
//! mutate the same cell re-entrantly.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// Identifier for a registered watcher.
pub type WatcherId = u64;

struct StateInner<T> {
    value: T,
    watchers: FxHashMap<WatcherId, Rc<dyn Fn(&T)>>,
    next_watcher_id: WatcherId,
}

impl<T> StateInner<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            watchers: FxHashMap::default(),
            next_watcher_id: 1,
        }
    }
}

fn notify<T>(inner: &Rc<RefCell<StateInner<T>>>) {
    // Snapshot the watcher list first so a watcher may read the cell.
    let watchers: Vec<Rc<dyn Fn(&T)>> = inner.borrow().watchers.values().cloned().collect();
    for watcher in watchers {
        let guard = inner.borrow();
        watcher(&guard.value);
    }
}

fn watch<T>(
    inner: &Rc<RefCell<StateInner<T>>>,
    watcher: impl Fn(&T) + 'static,
) -> WatcherSubscription<T> {
    let id = {
        let mut guard = inner.borrow_mut();
        let id = guard.next_watcher_id;
        guard.next_watcher_id += 1;
        guard.watchers.insert(id, Rc::new(watcher));
        id
    };
    WatcherSubscription {
        inner: Rc::clone(inner),
        id,
    }
}

/// Writable observable cell.
pub struct MutableState<T> {
    inner: Rc<RefCell<StateInner<T>>>,
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateInner::new(value))),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        notify(&self.inner);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        notify(&self.inner);
    }

    /// Read-only view sharing this cell.
    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn watch(&self, watcher: impl Fn(&T) + 'static) -> WatcherSubscription<T> {
        watch(&self.inner, watcher)
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    inner: Rc<RefCell<StateInner<T>>>,
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn watch(&self, watcher: impl Fn(&T) + 'static) -> WatcherSubscription<T> {
        watch(&self.inner, watcher)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Removes its watcher when dropped.
pub struct WatcherSubscription<T> {
    inner: Rc<RefCell<StateInner<T>>>,
    id: WatcherId,
}

impl<T> Drop for WatcherSubscription<T> {
    fn drop(&mut self) {
        self.inner.borrow_mut().watchers.remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_and_get_round_trip() {
        let cell = MutableState::new(0.0f32);
        cell.set(42.0);
        assert_eq!(cell.get(), 42.0);
        assert_eq!(cell.as_state().get(), 42.0);
    }

    #[test]
    fn watchers_observe_every_set() {
        let cell = MutableState::new(0i32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_cb = Rc::clone(&seen);
        let _sub = cell.watch(move |value| seen_cb.borrow_mut().push(*value));
        cell.set(1);
        cell.update(|value| *value += 1);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let cell = MutableState::new(0i32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_cb = Rc::clone(&seen);
        let sub = cell.watch(move |value| seen_cb.borrow_mut().push(*value));
        cell.set(1);
        drop(sub);
        cell.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }
}
