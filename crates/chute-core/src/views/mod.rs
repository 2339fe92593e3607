//! Routed views.
//!
//! Views that stay in sync with the device own a [`ViewBinding`], which
//! acquires a poller on activation and releases it exactly once on
//! deactivation. Views receive their collaborators through a
//! [`ViewContext`].

pub mod binding;
pub mod context;
pub mod errors;
pub mod live_stream;
pub mod overview;
pub mod photos;
pub mod security;
pub mod traits;

pub use binding::{BindingSpec, ViewBinding};
pub use context::ViewContext;
pub use errors::ViewError;
pub use live_stream::{LiveStreamView, StreamState};
pub use overview::{OverviewView, Section};
pub use photos::PhotosView;
pub use security::SecurityView;
pub use traits::Projection;
