use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// A unit of work handed off to the display context.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// An injected single-threaded execution context.
///
/// Display state is not safe for concurrent mutation, so updates derived from
/// values published on arbitrary threads must be marshalled onto the thread
/// that owns the display. The executor is that hand-off point, passed in
/// explicitly instead of reaching for an ambient main-loop reference.
pub trait Executor: Send + Sync {
    fn execute(&self, task: Task);
}

/// Runs tasks inline on the calling thread.
///
/// For callers that already live on the display thread, and for tests that
/// want updates to be observable immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateExecutor;

impl Executor for ImmediateExecutor {
    fn execute(&self, task: Task) {
        task();
    }
}

/// Queues tasks until the owning thread drains them.
///
/// `execute` may be called from any thread; [`QueuedExecutor::run_pending`]
/// is the display thread's tick, running queued tasks in FIFO order. Tasks
/// run with the queue lock released, so a task may enqueue further tasks.
#[derive(Default, Clone)]
pub struct QueuedExecutor {
    queue: Arc<Mutex<VecDeque<Task>>>,
}

impl QueuedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every task queued so far (including tasks queued by those tasks)
    /// and returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;

        loop {
            let task = self.queue.lock().pop_front();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }

        ran
    }

    /// How many tasks are waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }
}

impl Executor for QueuedExecutor {
    fn execute(&self, task: Task) {
        self.queue.lock().push_back(task);
    }
}
