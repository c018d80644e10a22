use crate::announce::Announcer;
use crate::config::Config;
use crate::lookup::LookupController;
use crate::pricing::ProductSource;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::MissedTickBehavior;

/// Run the kiosk until the operator quits or `shutdown` fires.
///
/// This loop is the only writer of the lookup state: scans, fetch
/// completions and timer expiries all funnel through it.
pub async fn run(
    config: &Config,
    source: Arc<dyn ProductSource>,
    announcer: Arc<dyn Announcer>,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.display.store_name.clone(), config.scanner.idle());
    let mut input = EventHandler::new(shutdown.clone())?;
    let (mut controller, mut completions) =
        LookupController::new(source, announcer, config.display.dwell());
    let state = controller.subscribe();

    let mut ticker = tokio::time::interval(config.display.tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(store = %config.display.store_name, "kiosk started");

    let result = loop {
        let drawn = {
            let snapshot = state.borrow();
            terminal.draw(|frame| draw(frame, &snapshot, &app))
        };
        if let Err(err) = drawn {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            event = input.next() => match event {
                Some(AppEvent::Key(key)) => {
                    if let InputAction::Submit(code) = handle_key(&mut app, key, Instant::now()) {
                        controller.submit(&code);
                    }
                }
                Some(AppEvent::Resize(cols, rows)) => {
                    tracing::debug!(cols, rows, "terminal resized");
                }
                None => {
                    tracing::warn!("input closed, stopping");
                    break Ok(());
                }
            },
            Some(event) = completions.recv() => controller.handle(event),
            _ = ticker.tick() => {
                if let Some(code) = app.on_tick(Instant::now()) {
                    controller.submit(&code);
                }
            }
            _ = shutdown.wait() => break Ok(()),
        }
    };

    shutdown.signal();
    controller.shutdown();
    drop(guard);
    tracing::info!("kiosk stopped");
    result
}
