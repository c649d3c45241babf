// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(rename = "userMessage", default)]
    pub user_message: Option<String>,
}

impl ChatRequest {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self { user_message: Some(user_message.into()) }
    }
}

/// A model's request to invoke one of the declared tools. Echoed, never executed.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

/// Success body of `POST /api/chat`. `function_call` is present only on the tool path.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub function_call: Option<ToolCall>,
}

/// Error body shared by every non-2xx response.
#[derive(Debug, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// What the coach answered: either prose or a tool call with a synthesized acknowledgement.
#[derive(Clone, Debug, PartialEq)]
pub enum CoachReply {
    Text { text: String },
    ToolCall { text: String, tool_call: ToolCall },
}

impl CoachReply {
    pub fn text(&self) -> &str {
        match self {
            CoachReply::Text { text } | CoachReply::ToolCall { text, .. } => text,
        }
    }
}

impl From<CoachReply> for ChatResponse {
    fn from(reply: CoachReply) -> Self {
        match reply {
            CoachReply::Text { text } => ChatResponse { text, function_call: None },
            CoachReply::ToolCall { text, tool_call } => ChatResponse {
                text,
                function_call: Some(tool_call),
            },
        }
    }
}

impl From<ChatResponse> for CoachReply {
    fn from(response: ChatResponse) -> Self {
        match response.function_call {
            Some(tool_call) => CoachReply::ToolCall { text: response.text, tool_call },
            None => CoachReply::Text { text: response.text },
        }
    }
}
