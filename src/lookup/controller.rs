use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

use crate::announce::{price_phrase, Announcer, NOT_FOUND_PHRASE};
use crate::pricing::{normalize_code, LookupError, Product, ProductSource};
use crate::ui::mvi::Reducer;

use super::intent::LookupIntent;
use super::reducer::LookupReducer;
use super::state::LookupState;
use super::timer::DisplayTimer;

/// Completions reported back to the controller by its spawned tasks.
#[derive(Debug)]
pub enum ControllerEvent {
    /// A fetch started by the submit tagged `generation` finished.
    FetchCompleted {
        generation: u64,
        code: String,
        result: Result<Vec<Product>, LookupError>,
    },
    /// The dwell timer armed for `generation` elapsed.
    DisplayExpired { generation: u64 },
}

pub type ControllerEventSender = mpsc::UnboundedSender<ControllerEvent>;
pub type ControllerEventReceiver = mpsc::UnboundedReceiver<ControllerEvent>;

/// Sequences scan → fetch → display → timeout → reset.
///
/// The owner of the controller is its only writer: it calls [`submit`] for
/// scanned codes and feeds every [`ControllerEvent`] from the receiver
/// returned by [`new`] into [`handle`]. Every submit bumps a generation
/// token; completions carrying an older token are discarded, so a slow
/// answer for a previous scan can never overwrite a newer one.
///
/// [`submit`]: LookupController::submit
/// [`handle`]: LookupController::handle
/// [`new`]: LookupController::new
pub struct LookupController {
    state: LookupState,
    generation: u64,
    source: Arc<dyn ProductSource>,
    announcer: Arc<dyn Announcer>,
    timer: DisplayTimer,
    dwell: Duration,
    events: ControllerEventSender,
    publisher: watch::Sender<LookupState>,
}

impl LookupController {
    pub fn new(
        source: Arc<dyn ProductSource>,
        announcer: Arc<dyn Announcer>,
        dwell: Duration,
    ) -> (Self, ControllerEventReceiver) {
        let (events, receiver) = mpsc::unbounded_channel();
        let (publisher, _) = watch::channel(LookupState::default());
        let controller = Self {
            state: LookupState::default(),
            generation: 0,
            source,
            announcer,
            timer: DisplayTimer::default(),
            dwell,
            events,
            publisher,
        };
        (controller, receiver)
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Snapshots of the state, one per change.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.publisher.subscribe()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a found product is on screen with its dwell timer running.
    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Start a lookup for `code`. Blank codes are ignored and return `false`.
    ///
    /// Re-submitting the code already on screen runs the full cycle again.
    /// Must be called inside a tokio runtime.
    pub fn submit(&mut self, code: &str) -> bool {
        let Some(code) = normalize_code(code) else {
            return false;
        };

        self.timer.cancel();
        self.generation += 1;
        let generation = self.generation;
        tracing::info!(code, generation, "lookup submitted");

        self.dispatch(LookupIntent::Submit {
            code: code.to_string(),
            generation,
        });

        let fetch = self.source.fetch(code);
        let events = self.events.clone();
        let code = code.to_string();
        tokio::spawn(async move {
            let result = fetch.await;
            let _ = events.send(ControllerEvent::FetchCompleted {
                generation,
                code,
                result,
            });
        });
        true
    }

    pub fn handle(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::FetchCompleted {
                generation,
                code,
                result,
            } => {
                if generation != self.generation {
                    tracing::debug!(
                        code = %code,
                        generation,
                        current = self.generation,
                        "discarding stale lookup result"
                    );
                    return;
                }
                self.on_fetch_completed(&code, result);
            }
            ControllerEvent::DisplayExpired { generation } => {
                if generation != self.generation {
                    return;
                }
                tracing::debug!(generation, "display dwell elapsed");
                self.clear();
            }
        }
    }

    /// Drop the displayed product and search flags. `last_query` is kept.
    pub fn clear(&mut self) {
        self.timer.cancel();
        self.dispatch(LookupIntent::Clear);
    }

    /// Cancel the dwell timer and release the speech engine.
    pub fn shutdown(&mut self) {
        self.timer.cancel();
        self.announcer.shutdown();
    }

    fn on_fetch_completed(&mut self, code: &str, result: Result<Vec<Product>, LookupError>) {
        match result {
            Ok(products) => {
                self.dispatch(LookupIntent::FetchSucceeded { products });
                match self.state.displayed.as_ref() {
                    Some(product) => {
                        tracing::info!(
                            code,
                            name = product.name(),
                            price = product.sell_price(),
                            "product found"
                        );
                        self.announcer.announce(&price_phrase(product.sell_price()));
                        self.timer
                            .arm(self.dwell, self.generation, self.events.clone());
                    }
                    None => {
                        tracing::info!(code, "product not found");
                        self.announcer.announce(NOT_FOUND_PHRASE);
                    }
                }
            }
            Err(err) => {
                tracing::warn!(code, error = %err, "lookup failed");
                self.dispatch(LookupIntent::FetchFailed {
                    message: format!("Error: {err}"),
                });
                self.announcer.announce(NOT_FOUND_PHRASE);
            }
        }
    }

    fn dispatch(&mut self, intent: LookupIntent) {
        self.state = LookupReducer::reduce(std::mem::take(&mut self.state), intent);
        let snapshot = &self.state;
        self.publisher.send_if_modified(|current| {
            if *current == *snapshot {
                return false;
            }
            *current = snapshot.clone();
            true
        });
    }
}
