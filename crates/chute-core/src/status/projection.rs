//! Fetch outcome → security view state.

use crate::http::FetchOutcome;
use crate::status::types::{SecurityState, StatusDocument, StatusMessage};
use crate::views::Projection;

impl Projection for SecurityState {
    type Document = StatusDocument;

    /// A failure only flips the banner; the last good image stays up.
    fn apply(&mut self, outcome: FetchOutcome<StatusDocument>) {
        match outcome {
            FetchOutcome::Success(doc) => {
                self.status_message = StatusMessage::Ok;
                self.image_source = doc.decached_image_source();
                self.latest = Some(doc);
            }
            FetchOutcome::Failure => {
                self.status_message = StatusMessage::Failed;
            }
        }
    }
}
