//! Spoken announcements for the cashier and the customer.
//!
//! Announcements are fire-and-forget and a new one always cuts off the one
//! still playing, so the price heard is the price of the last scan.

mod command;
mod log;

pub use command::CommandAnnouncer;
pub use log::LogAnnouncer;

/// Phrase spoken when a code has no product (or no price could be fetched).
pub const NOT_FOUND_PHRASE: &str = "El producto no existe. Validar en caja";

/// Speaks short phrases.
pub trait Announcer: Send + Sync {
    /// Interrupt whatever is being spoken and start speaking `text`.
    fn announce(&self, text: &str);

    /// Release the speech engine. Safe to call more than once; later
    /// announcements are dropped.
    fn shutdown(&self);
}

/// Spoken form of a sell price, e.g. `"1200 pesos"`.
pub fn price_phrase(price: &str) -> String {
    format!("{} pesos", price.trim())
}
