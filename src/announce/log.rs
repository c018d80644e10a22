use super::Announcer;

/// Muted announcer: phrases only go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, text: &str) {
        tracing::info!(phrase = text, "announcement (muted)");
    }

    fn shutdown(&self) {}
}
