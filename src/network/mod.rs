//! HTTP networking module
//!
//! Provides the transport seam and the reqwest-backed client behind it.

mod client;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use client::HttpClient;
pub use transport::{ApiRequest, ApiResponse, Transport};
