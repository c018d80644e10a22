use crate::ui::animation::TICKS_PER_FRAME;
use crate::ui::scan::ScanBuffer;
use std::time::{Duration, Instant};

/// View-side state of the kiosk: scan capture, animation clock, quit flag.
///
/// Lookup state lives in the controller; this only holds what the display
/// surface owns itself.
pub struct App {
    should_quit: bool,
    store_name: String,
    scan: ScanBuffer,
    ticks: u64,
}

impl App {
    pub fn new(store_name: impl Into<String>, scan_idle: Duration) -> Self {
        Self {
            should_quit: false,
            store_name: store_name.into(),
            scan: ScanBuffer::new(scan_idle),
            ticks: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn animation_frame(&self) -> usize {
        (self.ticks / TICKS_PER_FRAME) as usize
    }

    /// Feed one scanner keystroke into the hidden capture field.
    pub fn capture(&mut self, ch: char, now: Instant) {
        self.scan.push(ch, now);
    }

    /// Explicit terminator (Enter/Tab) from the scanner.
    pub fn accept_scan(&mut self) -> Option<String> {
        self.scan.take()
    }

    /// Advance the animation; returns a code if the scanner went quiet.
    pub fn on_tick(&mut self, now: Instant) -> Option<String> {
        self.ticks = self.ticks.wrapping_add(1);
        self.scan.flush_if_idle(now)
    }
}
