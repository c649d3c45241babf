// src/services/coach.rs
use tracing::debug;

use crate::message::CoachReply;
use crate::services::gemini::{
    Content, GeminiClient, GenerateContentRequest, GenerateContentResponse, Part, Tool,
    UpstreamError,
};
use crate::services::persona::coaching_tools;

/// Persona plus provider client. Shared read-only across requests.
#[derive(Clone, Debug)]
pub struct Coach {
    client: GeminiClient,
    persona: String,
}

impl Coach {
    pub fn new(client: GeminiClient, persona: impl Into<String>) -> Self {
        Self { client, persona: persona.into() }
    }

    pub async fn reply(&self, utterance: &str) -> Result<CoachReply, UpstreamError> {
        let request = build_request(&self.persona, utterance);
        let response = self.client.generate(&request).await?;
        let reply = interpret(response)?;
        debug!(
            model = self.client.model(),
            tool_call = matches!(reply, CoachReply::ToolCall { .. }),
            "coach replied"
        );
        Ok(reply)
    }
}

/// The utterance travels as its own `user` part; it is never spliced into the persona.
pub fn build_request(persona: &str, utterance: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::text(persona)],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part::text(utterance)],
        }],
        tools: vec![Tool { function_declarations: coaching_tools() }],
    }
}

/// Reads the first candidate. A function call wins over any text in the same candidate.
pub fn interpret(response: GenerateContentResponse) -> Result<CoachReply, UpstreamError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamError::Malformed("response has no candidates".to_string()))?;
    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

    if let Some(tool_call) = parts.iter().find_map(|p| p.function_call.clone()) {
        return Ok(CoachReply::ToolCall {
            text: acknowledge(&tool_call.name),
            tool_call,
        });
    }

    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() {
        return Err(UpstreamError::Malformed(
            "candidate has neither text nor function call".to_string(),
        ));
    }
    Ok(CoachReply::Text { text })
}

pub fn acknowledge(tool_name: &str) -> String {
    format!(
        "I see you're looking to {}! I've prepared the details.",
        tool_name.replace('_', " ")
    )
}
