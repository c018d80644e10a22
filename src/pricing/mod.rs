//! Price lookups against the store back office.
//!
//! [`ProductSource`] is the seam the lookup controller depends on;
//! [`PricingClient`] is the HTTP implementation.

mod client;
mod error;
mod types;

use std::future::Future;
use std::pin::Pin;

pub use client::{PricingClient, SEARCH_PATH};
pub use error::{LookupError, LookupErrorKind};
pub use types::Product;

/// Result of one lookup; owned so it can run on a spawned task.
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<Product>, LookupError>> + Send>>;

/// Maps a product code to zero or more products.
pub trait ProductSource: Send + Sync {
    /// Issue exactly one lookup for `code`.
    fn fetch(&self, code: &str) -> FetchFuture;
}

/// Scanned code as sent to the server: surrounding whitespace removed.
/// `None` for blank input, which is never looked up.
pub fn normalize_code(code: &str) -> Option<&str> {
    let code = code.trim();
    (!code.is_empty()).then_some(code)
}
