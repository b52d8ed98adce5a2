//! Search module
//!
//! Validates a query, paces the request, sends it and extracts the answer.

mod executor;
mod models;
mod pacing;

pub use executor::SearchClient;
pub use models::*;
pub use pacing::PacingDelay;
