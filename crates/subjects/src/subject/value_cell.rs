use std::sync::Arc;

use parking_lot::Mutex;

use super::registry::SubscriberRegistry;
use super::{Subject, Subscription};

/// A latest-value subject.
///
/// The cell always holds a current value. Every new subscriber is handed that
/// value synchronously inside `subscribe` (replay), and every later publish
/// is delivered to all live subscribers in subscription order. Equal values
/// published twice are delivered twice; the cell does no change detection.
///
/// Cloning the handle shares the same cell, so a producer thread can publish
/// while the owning side keeps its subscriptions.
pub struct ValueCell<T> {
    current: Arc<Mutex<T>>,
    registry: Arc<SubscriberRegistry<T>>,
}

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T: Clone + Send + 'static> ValueCell<T> {
    /// Creates a cell holding `initial`, with no subscribers.
    pub fn new(initial: T) -> Self {
        Self {
            current: Arc::new(Mutex::new(initial)),
            registry: Arc::new(SubscriberRegistry::new()),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.current.lock().clone()
    }

    /// Stores `value` as the current value, then delivers it to every live
    /// subscriber in subscription order.
    ///
    /// The subscriber list is snapshotted before iteration and callbacks run
    /// with no lock held, so callbacks may subscribe or cancel on this cell.
    /// A subscriber added from inside a callback replays the in-flight value
    /// through its own `subscribe` call and is not also invoked here.
    pub fn publish(&self, value: T) {
        let snapshot = {
            let mut current = self.current.lock();
            *current = value;
            current.clone()
        };

        self.registry.dispatch(&snapshot);
    }

    /// Registers `callback` and synchronously invokes it with the value the
    /// cell held when `subscribe` was entered, before returning.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let replay = self.current.lock().clone();

        let callback: Arc<dyn Fn(&T) + Send + Sync> = Arc::new(callback);
        let (id, live) = self.registry.insert(Arc::clone(&callback));
        let subscription = Subscription::new(&self.registry, id, live);

        callback(&replay);

        subscription
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl<T: Clone + Send + 'static> Subject<T> for ValueCell<T> {
    fn publish(&self, value: T) {
        ValueCell::publish(self, value);
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        ValueCell::subscribe(self, callback)
    }
}
