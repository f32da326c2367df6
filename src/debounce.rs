use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

/// Time source for [`DebounceTimer`], injectable so tests can drive the
/// timer by hand instead of waiting out real delays.
pub trait Clock: Send + Sync + 'static {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Trailing-edge debounce: at most one armed future waits at a time, and
/// scheduling again replaces the one still waiting. Cancellation only ever
/// reaches the delay; once the delay elapses the armed future runs detached
/// and nothing here can abort it mid-flight.
#[derive(Default)]
pub struct DebounceTimer {
    pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn schedule<F>(&mut self, clock: &Arc<dyn Clock>, delay: Duration, armed: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        // The sleep is created here, not inside the task, so a manual clock
        // sees the deadline before this call returns.
        let sleep = clock.sleep(delay);
        self.pending = Some(tokio::spawn(async move {
            sleep.await;
            tokio::spawn(armed);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
