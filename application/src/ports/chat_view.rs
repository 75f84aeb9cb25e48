//! Chat view port
//!
//! The chat handlers never keep messages themselves. They push them to a
//! view, which is free to print, draw, or record them. A handle returned
//! from [`ChatView::append`] lets a handler later swap a placeholder for
//! the real text and hang a sources block under it.

use docqa_domain::{Message, Sender};
use std::sync::Mutex;

/// Identifies a message previously appended to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle(pub u64);

/// Message renderer
pub trait ChatView: Send + Sync {
    /// Append a message at the bottom of the conversation
    fn append(&self, message: Message) -> MessageHandle;

    /// Replace the text of an appended message
    fn replace_text(&self, handle: MessageHandle, text: &str);

    /// Attach a titled list of sources below an appended message
    fn attach_sources(&self, handle: MessageHandle, header: &str, sources: &[String]);
}

/// A message as currently shown by [`MemoryChatView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub sender: Sender,
    pub text: String,
    pub sources: Option<(String, Vec<String>)>,
}

/// View that keeps rendered messages in memory
///
/// Useful wherever the conversation needs inspecting afterwards rather
/// than showing on a terminal.
#[derive(Debug, Default)]
pub struct MemoryChatView {
    messages: Mutex<Vec<RenderedMessage>>,
}

impl MemoryChatView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<RenderedMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<RenderedMessage> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl ChatView for MemoryChatView {
    fn append(&self, message: Message) -> MessageHandle {
        let mut messages = self.messages.lock().unwrap();
        messages.push(RenderedMessage {
            sender: message.sender,
            text: message.text,
            sources: None,
        });
        MessageHandle((messages.len() - 1) as u64)
    }

    fn replace_text(&self, handle: MessageHandle, text: &str) {
        if let Some(msg) = self.messages.lock().unwrap().get_mut(handle.0 as usize) {
            msg.text = text.to_string();
        }
    }

    fn attach_sources(&self, handle: MessageHandle, header: &str, sources: &[String]) {
        if let Some(msg) = self.messages.lock().unwrap().get_mut(handle.0 as usize) {
            msg.sources = Some((header.to_string(), sources.to_vec()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_replace() {
        let view = MemoryChatView::new();
        view.append(Message::user("question"));
        let handle = view.append(Message::bot("pending"));
        view.replace_text(handle, "answer");

        let messages = view.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "question");
        assert_eq!(messages[1].text, "answer");
        assert_eq!(messages[1].sender, Sender::Bot);
    }

    #[test]
    fn test_attach_sources() {
        let view = MemoryChatView::new();
        let handle = view.append(Message::bot("answer"));
        view.attach_sources(handle, "Sources:", &["a".to_string()]);

        let last = view.last().unwrap();
        assert_eq!(
            last.sources,
            Some(("Sources:".to_string(), vec!["a".to_string()]))
        );
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let view = MemoryChatView::new();
        view.replace_text(MessageHandle(9), "nothing");
        assert!(view.is_empty());
    }
}
