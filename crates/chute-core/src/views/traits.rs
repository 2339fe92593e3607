//! Projection trait definition.

use serde::de::DeserializeOwned;

use crate::http::FetchOutcome;

/// View state that can absorb the outcome of one fetch.
///
/// Implementations must not fail: every error has already been collapsed
/// into [`FetchOutcome::Failure`].
pub trait Projection: Clone + Send + Sync + 'static {
    /// Body of a successful response.
    type Document: DeserializeOwned + Send + 'static;

    fn apply(&mut self, outcome: FetchOutcome<Self::Document>);
}
