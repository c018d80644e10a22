//! Price-check kiosk: scan a barcode, show and speak the price, reset.

pub mod announce;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod pricing;
pub mod shutdown;
pub mod ui;
