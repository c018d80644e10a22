use crate::pricing::Product;
use crate::ui::mvi::Intent;

/// Transitions of the lookup state machine.
#[derive(Debug, Clone)]
pub enum LookupIntent {
    /// A code was scanned; a fetch tagged `generation` is about to start.
    Submit { code: String, generation: u64 },

    /// The current fetch answered. An empty list means "not found".
    FetchSucceeded { products: Vec<Product> },

    /// The current fetch failed; `message` is shown to the cashier.
    FetchFailed { message: String },

    /// Dwell time elapsed or an explicit reset.
    Clear,
}

impl Intent for LookupIntent {}
