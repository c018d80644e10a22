//! The scan → fetch → display → reset state machine.
//!
//! - `state.rs` - [`LookupState`], the snapshot views render
//! - `intent.rs` - transitions
//! - `reducer.rs` - pure state transitions
//! - `timer.rs` - cancellable dwell timer
//! - `controller.rs` - effects: fetching, announcing, generation tokens

mod controller;
mod intent;
mod reducer;
mod state;
mod timer;

pub use controller::{
    ControllerEvent, ControllerEventReceiver, ControllerEventSender, LookupController,
};
pub use intent::LookupIntent;
pub use reducer::LookupReducer;
pub use state::{LookupPhase, LookupState};
pub use timer::DisplayTimer;
