//! Photo gallery data and its projection.

pub mod types;

pub use types::{Photo, PhotoCollection, PhotosState};
