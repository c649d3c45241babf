// src/client/transcript.rs

pub const GREETING: &str =
    "Hello! I'm Monika, your AI life coach. What's one thing you'd like to unlock in your life today?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub is_tool_call: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into(), is_tool_call: false }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { sender: Sender::Assistant, text: text.into(), is_tool_call: false }
    }

    pub fn tool_call(text: impl Into<String>) -> Self {
        Self { sender: Sender::Assistant, text: text.into(), is_tool_call: true }
    }
}

/// Append-only list of exchanged messages. Entries cannot be edited or removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A fresh transcript seeded with the greeting.
    pub fn new() -> Self {
        Self { messages: vec![Message::assistant(GREETING)] }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
