use std::io::{IsTerminal, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::constants::SPINNER_INTERVAL_MS;

/// Spinner on stderr while a request is in flight. Does nothing when stderr
/// is not a terminal, so piped output stays clean.
pub struct AnimatedLogger {
    message: String,
    animation_chars: Vec<&'static str>,
    enabled: bool,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message,
            animation_chars,
            enabled: std::io::stderr().is_terminal(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(SPINNER_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, animation_chars[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    /// Stops the spinner and clears its line.
    pub async fn stop(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
            eprint!("\r\x1b[K");
            let _ = std::io::stderr().flush();
        }
    }
}
