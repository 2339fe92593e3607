//! chute-core: view-scoped polling client for a home-monitoring device
//!
//! The device publishes its latest security status and a rolling set of
//! photos over HTTP. This library keeps per-view state in sync with those
//! endpoints while a view is active, and releases the polling task exactly
//! once when the view goes away. It is used by the CLI and by any renderer
//! that subscribes to view state.
//!
//! # Main Entry Points
//!
//! - [`router`] - Map URL paths to views and drive activation/deactivation
//! - [`views`] - Overview, live stream, photos and security views
//! - [`poller`] - Cancellable repeating tasks
//! - [`status`] - Status document and its projection onto view state
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod http;
pub mod logging;
pub mod photos;
pub mod poller;
pub mod router;
pub mod status;
pub mod views;

// Re-export commonly used types at crate root for convenience
pub use config::ChuteConfig;
pub use http::{FetchError, FetchOutcome, HttpGet, ReqwestClient};
pub use photos::{Photo, PhotoCollection, PhotosState};
pub use poller::{PollerError, PollerHandle, PollerId, Scheduler};
pub use router::{ActiveView, Route, Router};
pub use status::{Detection, SecurityState, StatusDocument, StatusMessage};
pub use views::{
    LiveStreamView, OverviewView, PhotosView, SecurityView, StreamState, ViewContext, ViewError,
};

// Re-export logging initialization
pub use logging::init_logging;
