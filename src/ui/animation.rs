//! Looping arrow pointing the customer at the scanner.

/// Rows of the arrow track; one frame per entry.
const ARROW_FRAMES: &[[&str; 3]] = &[
    ["▼", " ", " "],
    ["▽", "▼", " "],
    [" ", "▽", "▼"],
    [" ", " ", "▽"],
];

/// UI ticks per animation frame.
pub const TICKS_PER_FRAME: u64 = 4;

pub fn arrow_frame(frame: usize) -> [&'static str; 3] {
    ARROW_FRAMES[frame % ARROW_FRAMES.len()]
}
