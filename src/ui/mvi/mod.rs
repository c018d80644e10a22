//! Model-View-Intent primitives shared by the kiosk state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ DisplaySurface
//!    ↑                                  │
//!    └──── scanner input, fetch results, timers
//! ```
//!
//! Reducers stay pure; anything with side effects (network, speech, timers)
//! lives in the owner that dispatches intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
