//! Controller lifetime scope: task tracking and disposal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Cloneable handle tying spawned fetch tasks to a controller's lifetime.
///
/// Once [`dispose`](ControllerScope::dispose) runs, in-flight tasks are
/// aborted and no new work is accepted. Completion paths must re-check
/// [`is_disposed`](ControllerScope::is_disposed) before touching state, since
/// an abort can race a task that already resolved its fetch.
#[derive(Clone)]
pub struct ControllerScope {
    disposed: Arc<AtomicBool>,
    tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl ControllerScope {
    pub fn new() -> Self {
        Self {
            disposed: Arc::new(AtomicBool::new(false)),
            tasks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Spawn a tracked task on the tokio runtime.
    ///
    /// No-op after disposal. Finished handles are pruned on each spawn so the
    /// registry stays bounded over a long-lived controller.
    pub fn spawn<F>(&self, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        if self.is_disposed() {
            tracing::debug!("scope disposed, refusing new task");
            return;
        }
        let mut tasks = self.tasks.lock();
        tasks.retain(|handle| !handle.is_finished());
        tasks.push(tokio::spawn(future));
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// End the scope: abandon all in-flight tasks.
    ///
    /// Idempotent. Late completions that slipped past the abort are dropped
    /// by the `is_disposed` re-check on their completion path.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        for handle in self.tasks.lock().drain(..) {
            handle.abort();
        }
    }
}

impl Default for ControllerScope {
    fn default() -> Self {
        Self::new()
    }
}
