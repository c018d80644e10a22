//! Terminal display surface of the kiosk.

pub mod animation;
pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod logo;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod scan;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
