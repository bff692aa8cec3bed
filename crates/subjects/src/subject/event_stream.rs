use std::sync::Arc;

use super::registry::SubscriberRegistry;
use super::{Subject, Subscription};

/// A fire-and-forget subject.
///
/// The stream holds no value. Each publish reaches exactly the subscribers
/// registered at the moment of the call; a publish with zero subscribers
/// drops the value, and late subscribers receive nothing retroactively.
pub struct EventStream<T> {
    registry: Arc<SubscriberRegistry<T>>,
}

impl<T> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T: Send + 'static> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> EventStream<T> {
    /// Creates a stream with no subscribers and no stored value.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(SubscriberRegistry::new()),
        }
    }

    /// Delivers `value` to every live subscriber in subscription order.
    ///
    /// The subscriber list is snapshotted before iteration and callbacks run
    /// with no lock held; subscribers added during the iteration do not see
    /// this value.
    pub fn publish(&self, value: T) {
        self.registry.dispatch(&value);
    }

    /// Registers `callback` with no immediate invocation.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let (id, live) = self.registry.insert(Arc::new(callback));
        Subscription::new(&self.registry, id, live)
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl<T: Send + 'static> Subject<T> for EventStream<T> {
    fn publish(&self, value: T) {
        EventStream::publish(self, value);
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        EventStream::subscribe(self, callback)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::EventStream;

    #[test]
    fn subscribe_does_not_invoke_the_callback() {
        let stream = EventStream::new();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let _subscription = stream.subscribe({
            let seen = Arc::clone(&seen);
            move |value: &String| seen.lock().push(value.clone())
        });

        assert!(seen.lock().is_empty());
    }

    #[test]
    fn values_published_before_subscribing_are_never_seen() {
        let stream = EventStream::new();

        stream.publish("x".to_string());

        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let _subscription = stream.subscribe({
            let seen = Arc::clone(&seen);
            move |value: &String| seen.lock().push(value.clone())
        });

        stream.publish("y".to_string());

        assert_eq!(seen.lock().as_slice(), &["y".to_string()]);
    }

    #[test]
    fn publish_with_zero_subscribers_is_a_noop() {
        let stream: EventStream<u32> = EventStream::new();
        assert_eq!(stream.subscriber_count(), 0);
        stream.publish(1);
    }

    #[test]
    fn delivery_follows_subscription_order() {
        let stream = EventStream::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let _first = stream.subscribe({
            let order = Arc::clone(&order);
            move |_: &u32| order.lock().push("first")
        });
        let _second = stream.subscribe({
            let order = Arc::clone(&order);
            move |_: &u32| order.lock().push("second")
        });

        stream.publish(1);

        assert_eq!(order.lock().as_slice(), &["first", "second"]);
    }

    #[test]
    fn cancelled_subscribers_are_skipped() {
        let stream = EventStream::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let subscription = stream.subscribe({
            let seen = Arc::clone(&seen);
            move |value: &u32| seen.lock().push(*value)
        });

        stream.publish(1);
        subscription.cancel();
        stream.publish(2);

        assert_eq!(seen.lock().as_slice(), &[1]);
        assert_eq!(stream.subscriber_count(), 0);
    }
}
