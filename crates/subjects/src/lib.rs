//! Thread-safe reactive subject primitives.
//!
//! This crate provides two in-process broadcast primitives and the
//! subscription handles that connect them to their observers:
//!
//! - [`ValueCell<T>`]: always holds a current value, replays it to every new
//!   subscriber and delivers every subsequent publish.
//! - [`EventStream<T>`]: holds no value; each publish reaches only the
//!   subscribers registered at that moment, late subscribers receive nothing
//!   retroactively.
//!
//! Both are cheap to clone (shared state behind an `Arc`), so producers on
//! other threads can publish while the owner keeps observing.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use subjects::{EventStream, ValueCell};
//!
//! let cell = ValueCell::new("initial".to_string());
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let subscription = cell.subscribe({
//!     let seen = Arc::clone(&seen);
//!     move |value: &String| seen.lock().push(value.clone())
//! });
//!
//! // Replay happens synchronously inside `subscribe`.
//! assert_eq!(seen.lock().as_slice(), &["initial".to_string()]);
//!
//! cell.publish("updated".to_string());
//! assert_eq!(seen.lock().len(), 2);
//!
//! // Dropping the handle cancels the registration.
//! drop(subscription);
//! cell.publish("unseen".to_string());
//! assert_eq!(seen.lock().len(), 2);
//!
//! // An event stream has no memory.
//! let events = EventStream::new();
//! events.publish(1u32); // dropped, nobody is listening
//! let _subscription = events.subscribe(|_: &u32| {});
//! ```

pub mod subject;

pub use subject::{EventStream, Subject, Subscription, Subscriptions, ValueCell};
