use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

/// Poll timeout for the input thread; bounds how late it notices shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and forwards it to the
/// async runtime loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::Builder::new()
            .name("input".into())
            .spawn(move || {
                while !shutdown.is_shutting_down() {
                    match event::poll(POLL_INTERVAL) {
                        Ok(false) => continue,
                        Ok(true) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal poll failed");
                            break;
                        }
                    }
                    let forwarded = match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                        Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "terminal read failed");
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }
                tracing::debug!("input thread stopped");
            })?;

        Ok(Self { rx })
    }

    /// Next input event; `None` once the input thread has stopped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
