//! Security status document and the state it projects onto.

pub mod projection;
pub mod types;

pub use types::{Detection, SecurityState, StatusDocument, StatusMessage};
