//! Device transport.
//!
//! The core only needs one primitive from the network: an asynchronous GET
//! that yields a JSON body or a failure. [`HttpGet`] is that seam;
//! [`ReqwestClient`] is the production implementation.

pub mod client;
pub mod errors;
pub mod traits;
pub mod types;

pub use client::ReqwestClient;
pub use errors::FetchError;
pub use traits::HttpGet;
pub use types::FetchOutcome;
