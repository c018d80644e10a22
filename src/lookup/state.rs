use crate::pricing::Product;
use crate::ui::mvi::UiState;

/// Where the current query is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    Idle,
    Loading,
    NotFound,
    Displayed,
}

/// Everything the display surface needs to know about the current lookup.
///
/// Owned by the lookup controller; views only ever see snapshots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupState {
    /// Last submitted code. Survives `clear`.
    pub last_query: String,
    /// Products returned for `last_query` (0 or 1 in practice).
    pub results: Vec<Product>,
    /// A fetch for `last_query` has completed, successfully or not.
    pub search_performed: bool,
    pub found: bool,
    /// A fetch is in flight.
    pub loading: bool,
    /// Product on screen; always the head of `results`.
    pub displayed: Option<Product>,
    pub error_message: Option<String>,
    /// Generation token of the submit that produced this state.
    pub generation: u64,
}

impl UiState for LookupState {}

impl LookupState {
    pub fn phase(&self) -> LookupPhase {
        if self.loading {
            LookupPhase::Loading
        } else if self.displayed.is_some() {
            LookupPhase::Displayed
        } else if self.shows_not_found() {
            LookupPhase::NotFound
        } else {
            LookupPhase::Idle
        }
    }

    /// The "not found" banner is up.
    pub fn shows_not_found(&self) -> bool {
        self.search_performed && !self.found
    }
}
