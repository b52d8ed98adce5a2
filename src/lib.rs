//! Grok-Search: search-augmented chat queries against the xAI Grok API
//!
//! A query goes through validation, a randomized pacing delay and a single
//! chat-completions request; the answer text of the first choice is returned.

pub mod config;
pub mod error;
pub mod network;
pub mod search;
pub mod tool;

pub use config::Settings;
pub use error::{GrokError, Result};
pub use network::{HttpClient, Transport};
pub use search::{PacingDelay, SearchClient, StatusCategory};
pub use tool::SearchTool;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default chat-completions endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "grok-3-latest";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Lower bound of the pacing delay in seconds
pub const MIN_PACING_SECS: f64 = 1.0;

/// Upper bound of the pacing delay in seconds (inclusive)
pub const MAX_PACING_SECS: f64 = 3.0;

/// Credential value shipped in sample configs; never a usable key
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Search mode sent in `search_parameters`
pub const SEARCH_MODE: &str = "auto";

/// Body characters shown after every response when verbose
pub const RESPONSE_PREVIEW_CHARS: usize = 200;

/// Body characters shown for a failed response when verbose
pub const ERROR_PREVIEW_CHARS: usize = 500;
