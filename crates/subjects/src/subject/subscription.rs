use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::trace;

use super::registry::SubscriberRegistry;

/// A live registration on a subject.
///
/// Dropping the handle cancels it, so the handle must be kept alive for as
/// long as deliveries are wanted; park it in a [`Subscriptions`] list when it
/// should share its owner's lifetime.
pub struct Subscription {
    live: Arc<AtomicBool>,
    remove: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    pub(crate) fn new<T: 'static>(
        registry: &Arc<SubscriberRegistry<T>>,
        id: u64,
        live: Arc<AtomicBool>,
    ) -> Self {
        let registry = Arc::downgrade(registry);

        Self {
            live,
            remove: Mutex::new(Some(Box::new(move || {
                if let Some(registry) = Weak::upgrade(&registry) {
                    registry.remove(id);
                }
            }))),
        }
    }

    /// Removes the callback from its subject.
    ///
    /// Idempotent, and safe to call from inside a delivery callback. Once
    /// this returns, the callback receives no further deliveries, including
    /// from a publish that was already iterating its snapshot.
    pub fn cancel(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            if let Some(remove) = self.remove.lock().take() {
                remove();
            }
        }
    }

    /// Whether the registration is still live.
    pub fn is_active(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        trace!("dropping subscription");
        self.cancel();
    }
}

/// A disposal list tying subscription lifetimes to an owner.
///
/// Dropping the list cancels everything it retained, the release half of the
/// acquire-on-bind / release-on-teardown pattern used by display bindings.
#[derive(Default)]
pub struct Subscriptions {
    handles: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `subscription` alive for the life of this list.
    pub fn retain(&mut self, subscription: Subscription) {
        self.handles.push(subscription);
    }

    /// Cancels everything retained so far; the list stays usable.
    pub fn cancel_all(&mut self) {
        self.handles.clear();
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
