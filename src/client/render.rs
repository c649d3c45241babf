// src/client/render.rs

use std::fmt;

use serde_json::{Map, Value};

use super::transcript::{Message, Sender};
use crate::message::{CoachReply, ToolCall};

pub const TOOL_CALL_NOTE: &str =
    "(This is the function call payload. In a real application, a system would execute this action.)";
pub const THINKING: &str = "Monika is thinking...";

const MARKDOWN_EMPHASIS: [char; 4] = ['*', '_', '#', '`'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drop `*`, `_`, `#` and backticks from plain-text replies.
    pub strip_markdown: bool,
}

/// Fixed-format summary of a tool call the coach asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolCallView {
    pub name: String,
    pub pretty_args: String,
}

impl ToolCallView {
    pub fn new(call: &ToolCall) -> Self {
        Self {
            name: call.name.clone(),
            pretty_args: pretty_args(&call.args),
        }
    }
}

impl fmt::Display for ToolCallView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Function Call Requested: {}", self.name)?;
        writeln!(f, "{}", self.pretty_args)?;
        write!(f, "{TOOL_CALL_NOTE}")
    }
}

/// Two-space indented JSON, matching what a browser's `JSON.stringify(args, null, 2)` shows.
pub fn pretty_args(args: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(args).unwrap_or_else(|_| "{}".to_string())
}

pub fn strip_markdown(text: &str) -> String {
    text.chars().filter(|c| !MARKDOWN_EMPHASIS.contains(c)).collect()
}

/// Builds the assistant transcript entry for a reply.
pub fn reply_message(reply: &CoachReply, options: RenderOptions) -> Message {
    match reply {
        CoachReply::ToolCall { tool_call, .. } => {
            Message::tool_call(ToolCallView::new(tool_call).to_string())
        }
        CoachReply::Text { text } if options.strip_markdown => {
            Message::assistant(strip_markdown(text))
        }
        CoachReply::Text { text } => Message::assistant(text.clone()),
    }
}

/// Renders a transcript entry as a labelled block for a terminal.
pub fn render_message(message: &Message) -> String {
    let label = match message.sender {
        Sender::User => "You",
        Sender::Assistant => "Monika",
    };
    format!("{label}: {}", message.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_emphasis_characters() {
        assert_eq!(
            strip_markdown("**Step 1:** _breathe_ # `now`!"),
            "Step 1: breathe  now!"
        );
    }

    #[test]
    fn text_is_verbatim_without_stripping() {
        let reply = CoachReply::Text { text: "**Go** for it".to_string() };
        let msg = reply_message(&reply, RenderOptions::default());
        assert_eq!(msg.text, "**Go** for it");
        assert!(!msg.is_tool_call);
    }
}
