//! Terminal implementation of the chat view

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::WaitSpinner;
use docqa_application::{ChatView, MessageHandle};
use docqa_domain::{Message, Sender};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Prints chat messages as they settle.
///
/// A bot message is a placeholder until its text is replaced: with progress
/// enabled it shows as a spinner, otherwise nothing is printed until the
/// final text arrives. User messages are not echoed since the REPL prompt
/// already shows them.
pub struct TerminalChatView {
    next_id: AtomicU64,
    /// Placeholders awaiting their final text
    pending: Mutex<HashMap<u64, Option<WaitSpinner>>>,
    out: Mutex<Box<dyn Write + Send>>,
    show_progress: bool,
}

impl TerminalChatView {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            pending: Mutex::new(HashMap::new()),
            out: Mutex::new(Box::new(std::io::stdout())),
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Write messages somewhere other than stdout
    pub fn with_output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Mutex::new(Box::new(out));
        self
    }

    fn write(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = write!(out, "{}", text);
            let _ = out.flush();
        }
    }
}

impl Default for TerminalChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for TerminalChatView {
    fn append(&self, message: Message) -> MessageHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if message.sender == Sender::Bot {
            let spinner = self
                .show_progress
                .then(|| WaitSpinner::start(message.text));
            if let Ok(mut pending) = self.pending.lock() {
                pending.insert(id, spinner);
            }
        }
        MessageHandle(id)
    }

    fn replace_text(&self, handle: MessageHandle, text: &str) {
        let spinner = self
            .pending
            .lock()
            .ok()
            .and_then(|mut pending| pending.remove(&handle.0))
            .flatten();
        if let Some(spinner) = spinner {
            spinner.finish();
        }
        self.write(&format!("{}\n", ConsoleFormatter::format_bot(text)));
    }

    fn attach_sources(&self, _handle: MessageHandle, header: &str, sources: &[String]) {
        self.write(&ConsoleFormatter::format_sources(header, sources));
    }
}
