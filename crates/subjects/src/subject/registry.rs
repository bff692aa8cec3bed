use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

pub(crate) type Callback<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

/// One registration: a callback plus the liveness flag shared with its
/// [`Subscription`](super::Subscription) handle.
struct Entry<T> {
    id: u64,
    live: Arc<AtomicBool>,
    callback: Callback<T>,
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            live: Arc::clone(&self.live),
            callback: Arc::clone(&self.callback),
        }
    }
}

/// Insertion-ordered subscriber map shared by both subject flavours.
///
/// `dispatch` snapshots the entries under the lock and invokes the callbacks
/// with the lock released, so a callback may subscribe or cancel on the same
/// subject without deadlocking. Each entry's liveness flag is re-checked just
/// before invocation: once a cancel call has returned, no further delivery
/// reaches that subscriber, even from a publish that was already iterating.
pub(crate) struct SubscriberRegistry<T> {
    entries: Mutex<Vec<Entry<T>>>,
    next_id: AtomicU64,
}

impl<T> SubscriberRegistry<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Appends a callback, returning its id and liveness flag.
    pub(crate) fn insert(&self, callback: Callback<T>) -> (u64, Arc<AtomicBool>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let live = Arc::new(AtomicBool::new(true));

        self.entries.lock().push(Entry {
            id,
            live: Arc::clone(&live),
            callback,
        });

        (id, live)
    }

    /// Removes the entry with `id`; no-op when it is already gone.
    pub(crate) fn remove(&self, id: u64) {
        self.entries.lock().retain(|entry| entry.id != id);
    }

    /// Invokes every live subscriber with `value`, in subscription order.
    ///
    /// Subscribers added during the iteration are absent from the snapshot
    /// and do not see this value through dispatch.
    pub(crate) fn dispatch(&self, value: &T) {
        let snapshot: Vec<Entry<T>> = self.entries.lock().iter().cloned().collect();

        for entry in snapshot {
            if entry.live.load(Ordering::SeqCst) {
                (entry.callback)(value);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::SubscriberRegistry;

    #[test]
    fn remove_is_a_noop_for_unknown_ids() {
        let registry: SubscriberRegistry<u32> = SubscriberRegistry::new();
        let (id, _live) = registry.insert(Arc::new(|_| {}));

        registry.remove(id + 1);
        assert_eq!(registry.len(), 1);

        registry.remove(id);
        registry.remove(id);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn dispatch_skips_entries_cancelled_earlier_in_the_same_dispatch() {
        let registry: Arc<SubscriberRegistry<u32>> = Arc::new(SubscriberRegistry::new());
        let delivered = Arc::new(AtomicUsize::new(0));

        // Filled in once the counter entry exists; the canceller runs first
        // in snapshot order and flips the counter's liveness flag.
        let counter_live: Arc<Mutex<Option<Arc<AtomicBool>>>> = Arc::new(Mutex::new(None));

        let (_canceller_id, _canceller_live) = registry.insert(Arc::new({
            let counter_live = Arc::clone(&counter_live);
            move |_| {
                if let Some(live) = counter_live.lock().as_ref() {
                    live.store(false, Ordering::SeqCst);
                }
            }
        }));

        let (_counter_id, live) = registry.insert(Arc::new({
            let delivered = Arc::clone(&delivered);
            move |_| {
                delivered.fetch_add(1, Ordering::SeqCst);
            }
        }));
        *counter_live.lock() = Some(live);

        registry.dispatch(&1);
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }
}
