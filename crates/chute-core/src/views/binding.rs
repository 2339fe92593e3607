//! View lifecycle binding.
//!
//! Ties one poller to one view instance: `activate` acquires it,
//! `deactivate` (or drop) releases it. State lives in a slot that is
//! emptied on release, so a fetch that resolves afterwards has nowhere to
//! write.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::errors::ChuteError;
use crate::http::{FetchError, FetchOutcome, HttpGet};
use crate::poller::{PollerHandle, PollerId, Scheduler};
use crate::views::context::ViewContext;
use crate::views::errors::ViewError;
use crate::views::traits::Projection;

/// Polling parameters of one view.
#[derive(Debug, Clone)]
pub struct BindingSpec {
    pub view: &'static str,
    pub endpoint: String,
    pub interval: Duration,
    /// Fetch once right away instead of waiting for the first tick.
    pub fetch_on_activate: bool,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Active(PollerHandle),
    Released,
}

/// Holds the state publisher while the view is alive.
struct StateSlot<P>(Arc<Mutex<Option<watch::Sender<P>>>>);

impl<P> Clone for StateSlot<P> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<P: Projection> StateSlot<P> {
    fn new(sender: watch::Sender<P>) -> Self {
        Self(Arc::new(Mutex::new(Some(sender))))
    }

    fn lock(&self) -> MutexGuard<'_, Option<watch::Sender<P>>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply an outcome if the view is still alive. Returns whether it was applied.
    fn apply(&self, outcome: FetchOutcome<P::Document>) -> bool {
        match self.lock().as_ref() {
            Some(sender) => {
                sender.send_modify(|state| state.apply(outcome));
                true
            }
            None => false,
        }
    }

    fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Drop the publisher. Subscribers keep the last value and see the channel close.
    fn close(&self) -> bool {
        self.lock().take().is_some()
    }
}

/// Scoped acquisition of a polling task for one view instance.
pub struct ViewBinding<P: Projection> {
    spec: BindingSpec,
    http: Arc<dyn HttpGet>,
    scheduler: Scheduler,
    slot: StateSlot<P>,
    receiver: watch::Receiver<P>,
    phase: Phase,
}

impl<P: Projection> ViewBinding<P> {
    pub fn new(ctx: &ViewContext, spec: BindingSpec, initial: P) -> Self {
        let (sender, receiver) = watch::channel(initial);
        Self {
            spec,
            http: ctx.http.clone(),
            scheduler: ctx.scheduler.clone(),
            slot: StateSlot::new(sender),
            receiver,
            phase: Phase::Idle,
        }
    }

    /// Start polling. Allowed once per binding.
    pub fn activate(&mut self) -> Result<(), ViewError> {
        match self.phase {
            Phase::Active(_) => {
                return Err(ViewError::AlreadyActive {
                    view: self.spec.view,
                });
            }
            Phase::Released => {
                return Err(ViewError::Released {
                    view: self.spec.view,
                });
            }
            Phase::Idle => {}
        }

        let view = self.spec.view;
        let http = self.http.clone();
        let endpoint: Arc<str> = Arc::from(self.spec.endpoint.as_str());
        let slot = self.slot.clone();

        let handle = self.scheduler.start(view, self.spec.interval, move || {
            tokio::spawn(fetch_cycle(view, http.clone(), endpoint.clone(), slot.clone()));
        })?;

        if self.spec.fetch_on_activate {
            self.spawn_fetch();
        }

        info!(
            event = "core.view.activated",
            view = view,
            poller_id = %handle.id(),
            endpoint = %self.spec.endpoint
        );
        self.phase = Phase::Active(handle);
        Ok(())
    }

    /// Stop polling and discard the state publisher.
    ///
    /// Returns `true` for the call that released the view; later calls are
    /// no-ops.
    pub fn deactivate(&mut self) -> bool {
        let previous = std::mem::replace(&mut self.phase, Phase::Released);
        self.slot.close();

        match previous {
            Phase::Active(handle) => {
                self.scheduler.stop(&handle);
                info!(
                    event = "core.view.deactivated",
                    view = self.spec.view,
                    poller_id = %handle.id()
                );
                true
            }
            Phase::Idle => {
                debug!(
                    event = "core.view.deactivated",
                    view = self.spec.view,
                    reason = "never_activated"
                );
                true
            }
            Phase::Released => false,
        }
    }

    /// Run one fetch-and-project cycle now, outside the schedule.
    pub fn spawn_fetch(&self) {
        tokio::spawn(fetch_cycle(
            self.spec.view,
            self.http.clone(),
            Arc::from(self.spec.endpoint.as_str()),
            self.slot.clone(),
        ));
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn is_released(&self) -> bool {
        matches!(self.phase, Phase::Released)
    }

    pub fn poller_id(&self) -> Option<PollerId> {
        match &self.phase {
            Phase::Active(handle) => Some(handle.id()),
            _ => None,
        }
    }

    pub fn spec(&self) -> &BindingSpec {
        &self.spec
    }

    /// Receive every state change. The channel closes on deactivation.
    pub fn subscribe(&self) -> watch::Receiver<P> {
        self.receiver.clone()
    }

    /// Current state; after deactivation, the last state before it.
    pub fn snapshot(&self) -> P {
        self.receiver.borrow().clone()
    }
}

impl<P: Projection> Drop for ViewBinding<P> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

async fn fetch_cycle<P: Projection>(
    view: &'static str,
    http: Arc<dyn HttpGet>,
    endpoint: Arc<str>,
    slot: StateSlot<P>,
) {
    if !slot.is_open() {
        debug!(
            event = "core.view.fetch_skipped",
            view = view,
            reason = "view_deactivated"
        );
        return;
    }

    let result = http.get_json(&endpoint).await.and_then(|body| {
        serde_json::from_value::<P::Document>(body).map_err(|e| FetchError::Decode {
            url: endpoint.to_string(),
            message: e.to_string(),
        })
    });

    if let Err(e) = &result {
        warn!(
            event = "core.view.fetch_failed",
            view = view,
            endpoint = %endpoint,
            error = %e,
            error_code = e.error_code()
        );
    }

    if slot.apply(FetchOutcome::from(result)) {
        debug!(event = "core.view.state_updated", view = view);
    } else {
        debug!(
            event = "core.view.update_discarded",
            view = view,
            reason = "view_deactivated"
        );
    }
}
