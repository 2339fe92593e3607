use std::fmt;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::poller::scheduler::Scheduler;

/// Identifier of one started poller, unique per [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PollerId(pub(crate) u64);

impl fmt::Display for PollerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "poller-{}", self.0)
    }
}

/// Ownership of one scheduled repeating task.
///
/// Not `Clone`: exactly one owner may stop it. Dropping the handle stops
/// the task.
#[derive(Debug)]
pub struct PollerHandle {
    pub(crate) id: PollerId,
    pub(crate) name: &'static str,
    pub(crate) interval: Duration,
    pub(crate) token: CancellationToken,
    pub(crate) scheduler: Scheduler,
}

impl PollerHandle {
    pub fn id(&self) -> PollerId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel all future ticks.
    ///
    /// Returns `true` only for the call that actually stopped the task;
    /// repeated calls are no-ops.
    pub fn stop(&self) -> bool {
        self.token.cancel();
        let was_live = self.scheduler.release(self.id);

        if was_live {
            info!(
                event = "core.poller.stopped",
                poller_id = %self.id,
                name = self.name
            );
        }

        was_live
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
