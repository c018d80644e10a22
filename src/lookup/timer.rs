use std::time::Duration;
use tokio::task::JoinHandle;

use super::controller::{ControllerEvent, ControllerEventSender};

/// Cancellable auto-clear timer. At most one is live: arming cancels the
/// previous one, and dropping the timer cancels it.
#[derive(Default)]
pub struct DisplayTimer {
    handle: Option<JoinHandle<()>>,
}

impl DisplayTimer {
    /// Send `DisplayExpired { generation }` after `dwell` unless cancelled
    /// first. Must be called inside a tokio runtime.
    pub fn arm(&mut self, dwell: Duration, generation: u64, events: ControllerEventSender) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(dwell).await;
            let _ = events.send(ControllerEvent::DisplayExpired { generation });
        }));
    }

    /// Returns `true` if a pending timer was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DisplayTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
