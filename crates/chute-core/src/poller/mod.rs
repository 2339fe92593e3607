//! Cancellable repeating tasks.
//!
//! A [`Scheduler`] hands out one [`PollerHandle`] per started task. The
//! handle is the only way to stop the task; stopping is idempotent and a
//! stopped task never ticks again. Dropping the handle stops the task too.

pub mod errors;
pub mod scheduler;
pub mod types;

pub use errors::PollerError;
pub use scheduler::Scheduler;
pub use types::{PollerHandle, PollerId};
