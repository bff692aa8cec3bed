//! Subject types and subscription handles.
//!
//! A subject is a broadcast point: observers register a callback via
//! `subscribe` and producers push values via `publish`. The two flavours
//! differ only in memory:
//!
//! - [`ValueCell<T>`] remembers the latest value and replays it on subscribe.
//! - [`EventStream<T>`] remembers nothing.
//!
//! The [`Subject`] trait covers the shared surface so binding code can be
//! written once for either flavour.

mod event_stream;
mod registry;
mod subscription;
mod value_cell;

pub use event_stream::EventStream;
pub use subscription::{Subscription, Subscriptions};
pub use value_cell::ValueCell;

/// The common surface of [`ValueCell`] and [`EventStream`].
///
/// Callbacks must be `Send + Sync` because any thread may publish, and a
/// subject handle may be cloned onto other threads.
pub trait Subject<T> {
    /// Delivers `value` to the currently registered subscribers, in
    /// subscription order.
    fn publish(&self, value: T);

    /// Registers `callback` and returns the handle that removes it again.
    ///
    /// Whether the callback is invoked immediately depends on the subject
    /// flavour; see the inherent `subscribe` methods.
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static;
}
