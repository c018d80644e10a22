use std::time::{Duration, Instant};

/// Longest code accepted; a longer burst is key-repeat noise and is dropped whole.
pub const MAX_CODE_LEN: usize = 32;

/// Invisible capture field for the barcode scanner.
///
/// A keyboard-wedge scanner types the digits in a fast burst, sometimes
/// followed by Enter. A code is complete on Enter or once the keyboard has
/// been quiet for `idle`.
#[derive(Debug)]
pub struct ScanBuffer {
    digits: String,
    last_input: Option<Instant>,
    idle: Duration,
    /// The current burst ran past `MAX_CODE_LEN`; swallow it until it ends.
    overflowed: bool,
}

impl ScanBuffer {
    pub fn new(idle: Duration) -> Self {
        Self {
            digits: String::new(),
            last_input: None,
            idle,
            overflowed: false,
        }
    }

    /// Record one keystroke. Non-digits are ignored.
    pub fn push(&mut self, ch: char, now: Instant) {
        if !ch.is_ascii_digit() {
            return;
        }
        self.last_input = Some(now);
        if self.overflowed {
            return;
        }
        if self.digits.len() >= MAX_CODE_LEN {
            tracing::debug!(len = self.digits.len(), "scan buffer overflow, dropping burst");
            self.digits.clear();
            self.overflowed = true;
            return;
        }
        self.digits.push(ch);
    }

    /// Hand out the captured code and empty the buffer so the same code can
    /// be scanned again right away. An overflowed burst yields nothing.
    pub fn take(&mut self) -> Option<String> {
        self.last_input = None;
        let code = std::mem::take(&mut self.digits);
        if std::mem::take(&mut self.overflowed) || code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    /// Complete the scan if the scanner has gone quiet.
    pub fn flush_if_idle(&mut self, now: Instant) -> Option<String> {
        match self.last_input {
            Some(last) if now.saturating_duration_since(last) >= self.idle => self.take(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty() && !self.overflowed
    }
}
