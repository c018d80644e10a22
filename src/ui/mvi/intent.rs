/// Marker trait for intents: scans, fetch completions, timer expiries.
pub trait Intent: Send + 'static {}
