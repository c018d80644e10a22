use parking_lot::Mutex;
use std::io;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;

use super::Announcer;
use crate::config::SpeechConfig;

enum SpeechRequest {
    Say(String),
    Stop,
}

/// Speaks through an external engine (`espeak-ng` by default).
///
/// A dedicated worker thread owns the engine process. Every request kills
/// the utterance in progress before starting the next one.
pub struct CommandAnnouncer {
    sender: Mutex<Option<Sender<SpeechRequest>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl CommandAnnouncer {
    pub fn spawn(config: &SpeechConfig) -> io::Result<Self> {
        let (sender, receiver) = channel();
        let program = config.command.clone();
        let args = config.args.clone();
        let worker = std::thread::Builder::new()
            .name("speech".to_string())
            .spawn(move || speech_loop(receiver, program, args))?;

        tracing::info!(engine = %config.command, "speech engine ready");
        Ok(Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        })
    }
}

impl Announcer for CommandAnnouncer {
    fn announce(&self, text: &str) {
        let guard = self.sender.lock();
        let Some(sender) = guard.as_ref() else {
            tracing::debug!(phrase = text, "speech engine shut down, dropping announcement");
            return;
        };
        if sender.send(SpeechRequest::Say(text.to_string())).is_err() {
            tracing::warn!(phrase = text, "speech worker is gone");
        }
    }

    fn shutdown(&self) {
        let Some(sender) = self.sender.lock().take() else {
            return;
        };
        let _ = sender.send(SpeechRequest::Stop);
        if let Some(worker) = self.worker.lock().take() {
            if worker.join().is_err() {
                tracing::warn!("speech worker panicked");
            }
        }
        tracing::info!("speech engine released");
    }
}

impl Drop for CommandAnnouncer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn speech_loop(receiver: Receiver<SpeechRequest>, program: String, args: Vec<String>) {
    let mut current: Option<Child> = None;

    while let Ok(request) = receiver.recv() {
        flush(&mut current);
        match request {
            SpeechRequest::Say(text) => {
                let spawned = Command::new(&program)
                    .args(&args)
                    .arg(&text)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn();
                match spawned {
                    Ok(child) => {
                        tracing::debug!(phrase = %text, "speaking");
                        current = Some(child);
                    }
                    Err(err) => {
                        tracing::warn!(engine = %program, error = %err, "failed to start speech engine");
                    }
                }
            }
            SpeechRequest::Stop => break,
        }
    }

    flush(&mut current);
}

/// Stop the utterance in progress, if any, and reap the process.
fn flush(current: &mut Option<Child>) {
    let Some(mut child) = current.take() else {
        return;
    };
    if let Ok(None) = child.try_wait() {
        let _ = child.kill();
    }
    let _ = child.wait();
}
