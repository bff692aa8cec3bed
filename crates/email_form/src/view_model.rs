use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use subjects::{EventStream, Subject, Subscription, ValueCell};
use tracing::trace;

use crate::executor::Executor;
use crate::validation::is_likely_email;

/// Binds an email input subject to an observable validity flag.
///
/// Raw text goes in through [`on_input`](Self::on_input); the classification
/// runs on the publishing thread and the resulting boolean is stored through
/// the injected executor, so [`is_valid`](Self::is_valid) only ever changes
/// on the display context. The flag starts out `false` and is never an
/// error: input that fails the check is a normal negative classification.
pub struct EmailFormModel<S> {
    subject: S,
    is_valid: Arc<AtomicBool>,
    #[allow(dead_code)]
    subscription: Subscription,
}

impl<S: Subject<String>> EmailFormModel<S> {
    /// Binds `subject` and subscribes for its deliveries.
    ///
    /// With a replaying subject the current value is classified immediately;
    /// the store of the result still goes through `executor`.
    pub fn new(subject: S, executor: Arc<dyn Executor>) -> Self {
        let is_valid = Arc::new(AtomicBool::new(false));

        let subscription = subject.subscribe({
            let is_valid = Arc::clone(&is_valid);
            move |text: &String| {
                let valid = is_likely_email(text);
                trace!("classified input. valid: {}", valid);

                let is_valid = Arc::clone(&is_valid);
                executor.execute(Box::new(move || {
                    is_valid.store(valid, Ordering::SeqCst);
                }));
            }
        });

        Self {
            subject,
            is_valid,
            subscription,
        }
    }

    /// Forwards the field's text verbatim into the subject.
    pub fn on_input(&self, text: &str) {
        self.subject.publish(text.to_owned());
    }

    /// The latest derived validity, as of the last executor tick.
    pub fn is_valid(&self) -> bool {
        self.is_valid.load(Ordering::SeqCst)
    }
}

impl EmailFormModel<ValueCell<String>> {
    /// A model backed by a latest-value cell holding the empty string.
    ///
    /// The replay of the initial empty input classifies as invalid, so the
    /// flag is coherent with the field contents from construction onward.
    pub fn latest_value(executor: Arc<dyn Executor>) -> Self {
        Self::new(ValueCell::new(String::new()), executor)
    }
}

impl EmailFormModel<EventStream<String>> {
    /// A model backed by a fire-and-forget stream.
    ///
    /// Nothing is classified until the first input arrives.
    pub fn event_driven(executor: Arc<dyn Executor>) -> Self {
        Self::new(EventStream::new(), executor)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::executor::{ImmediateExecutor, QueuedExecutor};

    use super::EmailFormModel;

    #[test]
    fn starts_invalid() {
        let executor = Arc::new(ImmediateExecutor);
        let model = EmailFormModel::latest_value(executor);

        assert!(!model.is_valid());
    }

    #[test]
    fn tracks_the_latest_input() {
        let executor = Arc::new(ImmediateExecutor);
        let model = EmailFormModel::latest_value(executor);

        model.on_input("a@b.com");
        assert!(model.is_valid());

        model.on_input("nope");
        assert!(!model.is_valid());
    }

    #[test]
    fn event_driven_model_classifies_each_event() {
        let executor = Arc::new(ImmediateExecutor);
        let model = EmailFormModel::event_driven(executor);

        assert!(!model.is_valid());

        model.on_input("a@b.com");
        assert!(model.is_valid());

        model.on_input("a@b");
        assert!(!model.is_valid());
    }

    #[test]
    fn updates_wait_for_the_executor_tick() {
        let executor = Arc::new(QueuedExecutor::new());
        let model = EmailFormModel::latest_value(executor.clone());

        // The replay of the initial value is queued but not yet applied.
        assert!(executor.pending() > 0);
        executor.run_pending();
        assert!(!model.is_valid());

        model.on_input("a@b.com");
        assert!(!model.is_valid());

        executor.run_pending();
        assert!(model.is_valid());
    }
}
