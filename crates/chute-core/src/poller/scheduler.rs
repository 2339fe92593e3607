use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::poller::errors::PollerError;
use crate::poller::types::{PollerHandle, PollerId};

/// Starts repeating tasks on the current tokio runtime and tracks which of
/// them are still live.
///
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    inner: Arc<SchedulerInner>,
}

#[derive(Debug, Default)]
struct SchedulerInner {
    next_id: AtomicU64,
    live: Mutex<HashMap<PollerId, &'static str>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_tick` every `interval`, first after one full interval.
    ///
    /// `on_tick` runs on the poller's task and should return quickly; work
    /// that awaits (a fetch) is spawned by the callback so slow work never
    /// delays the next tick.
    pub fn start<F>(
        &self,
        name: &'static str,
        interval: Duration,
        mut on_tick: F,
    ) -> Result<PollerHandle, PollerError>
    where
        F: FnMut() + Send + 'static,
    {
        if interval.is_zero() {
            return Err(PollerError::ZeroInterval { name });
        }
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| PollerError::NoRuntime { name })?;

        let id = PollerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let token = CancellationToken::new();
        let task_token = token.clone();
        let first_tick = Instant::now() + interval;

        self.live().insert(id, name);

        runtime.spawn(async move {
            let mut ticker = time::interval_at(first_tick, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        // stop() may race the tick from another worker
                        if task_token.is_cancelled() {
                            break;
                        }
                        trace!(event = "core.poller.tick", poller_id = %id, name = name);
                        on_tick();
                    }
                }
            }

            debug!(event = "core.poller.loop_exited", poller_id = %id, name = name);
        });

        info!(
            event = "core.poller.started",
            poller_id = %id,
            name = name,
            interval_ms = interval.as_millis() as u64
        );

        Ok(PollerHandle {
            id,
            name,
            interval,
            token,
            scheduler: self.clone(),
        })
    }

    /// Stop a poller started by this scheduler.
    ///
    /// Stopping a handle twice, or a handle that belongs to another
    /// scheduler, is a no-op that returns `false`.
    pub fn stop(&self, handle: &PollerHandle) -> bool {
        if !Arc::ptr_eq(&self.inner, &handle.scheduler.inner) {
            debug!(
                event = "core.poller.stop_ignored",
                poller_id = %handle.id(),
                reason = "unknown_handle"
            );
            return false;
        }
        handle.stop()
    }

    /// Number of pollers started and not yet stopped.
    pub fn live_count(&self) -> usize {
        self.live().len()
    }

    pub fn is_live(&self, id: PollerId) -> bool {
        self.live().contains_key(&id)
    }

    pub(crate) fn release(&self, id: PollerId) -> bool {
        self.live().remove(&id).is_some()
    }

    fn live(&self) -> MutexGuard<'_, HashMap<PollerId, &'static str>> {
        self.inner
            .live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting(scheduler: &Scheduler, interval_ms: u64) -> (PollerHandle, Arc<AtomicUsize>) {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = scheduler
            .start("test", Duration::from_millis(interval_ms), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        (handle, ticks)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_full_interval() {
        let scheduler = Scheduler::new();
        let (_handle, ticks) = counting(&scheduler, 1000);

        time::sleep(Duration::from_millis(999)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0, "no immediate first tick");

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_future_ticks() {
        let scheduler = Scheduler::new();
        let (handle, ticks) = counting(&scheduler, 100);

        time::sleep(Duration::from_millis(250)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        assert!(scheduler.stop(&handle));
        assert!(handle.is_stopped());

        time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let scheduler = Scheduler::new();
        let (handle, _ticks) = counting(&scheduler, 100);
        assert_eq!(scheduler.live_count(), 1);

        assert!(scheduler.stop(&handle));
        assert!(!scheduler.stop(&handle));
        assert!(!handle.stop());
        assert_eq!(scheduler.live_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_first_tick() {
        let scheduler = Scheduler::new();
        let (handle, ticks) = counting(&scheduler, 1000);

        assert!(scheduler.stop(&handle));
        time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_with_foreign_scheduler_is_noop() {
        let scheduler = Scheduler::new();
        let other = Scheduler::new();
        let (handle, _ticks) = counting(&scheduler, 100);

        assert!(!other.stop(&handle));
        assert!(!handle.is_stopped());
        assert!(scheduler.is_live(handle.id()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_handle_stops_task() {
        let scheduler = Scheduler::new();
        let (handle, ticks) = counting(&scheduler, 100);

        drop(handle);
        assert_eq!(scheduler.live_count(), 0);

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let scheduler = Scheduler::new();
        let err = scheduler
            .start("zero", Duration::ZERO, || {})
            .unwrap_err();
        assert!(matches!(err, PollerError::ZeroInterval { name: "zero" }));
        assert_eq!(scheduler.live_count(), 0);
    }

    #[test]
    fn test_start_outside_runtime_rejected() {
        let scheduler = Scheduler::new();
        let err = scheduler
            .start("outside", Duration::from_secs(1), || {})
            .unwrap_err();
        assert!(matches!(err, PollerError::NoRuntime { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let scheduler = Scheduler::new();
        let (a, _) = counting(&scheduler, 100);
        let (b, _) = counting(&scheduler, 100);
        assert_ne!(a.id(), b.id());
        assert_eq!(scheduler.live_count(), 2);
    }
}
