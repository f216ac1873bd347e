//! OpenAI Chat Completions client.
//!
//! Translates the provider-neutral message model (Anthropic-shaped content
//! blocks) to and from the Chat Completions wire format: tool uses become
//! `tool_calls`, tool results become `role: "tool"` messages.

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{ChatResponse, Content, ContentBlock, LlmError, Message, Tool};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    /// Send a chat request and parse the response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-200 status, or an
    /// unparseable body.
    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
        tools: Option<&[Tool]>,
    ) -> Result<ChatResponse, LlmError> {
        let body = CcRequest {
            model,
            max_completion_tokens: max_tokens,
            messages: build_messages(system, messages),
            tools: tools.map(|ts| ts.iter().map(to_cc_tool).collect()),
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_completion_tokens: u32,
    messages: Vec<CcMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<serde_json::Value>>,
}

#[derive(serde::Serialize)]
struct CcMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<CcToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(serde::Serialize)]
struct CcToolCall {
    id: String,
    r#type: String,
    function: CcFunction,
}

#[derive(serde::Serialize)]
struct CcFunction {
    name: String,
    arguments: String,
}

#[derive(serde::Deserialize)]
struct CcResponse {
    model: String,
    choices: Vec<CcChoice>,
    usage: CcUsage,
}

#[derive(serde::Deserialize)]
struct CcChoice {
    message: CcResponseMessage,
    finish_reason: String,
}

#[derive(serde::Deserialize)]
struct CcResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<CcResponseToolCall>,
}

#[derive(serde::Deserialize)]
struct CcResponseToolCall {
    id: String,
    function: CcResponseFunction,
}

#[derive(serde::Deserialize)]
struct CcResponseFunction {
    name: String,
    arguments: String,
}

#[derive(serde::Deserialize)]
struct CcUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

// =============================================================================
// TRANSLATION
// =============================================================================

fn to_cc_tool(tool: &Tool) -> serde_json::Value {
    serde_json::json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.input_schema,
        }
    })
}

fn build_messages(system: &str, messages: &[Message]) -> Vec<CcMessage> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(CcMessage {
            role: "system".to_owned(),
            content: Some(system.to_owned()),
            tool_calls: None,
            tool_call_id: None,
        });
    }

    for message in messages {
        match &message.content {
            Content::Text(text) => out.push(CcMessage {
                role: message.role.clone(),
                content: Some(text.clone()),
                tool_calls: None,
                tool_call_id: None,
            }),
            Content::Blocks(blocks) => push_block_messages(&mut out, &message.role, blocks),
        }
    }
    out
}

fn push_block_messages(out: &mut Vec<CcMessage>, role: &str, blocks: &[ContentBlock]) {
    let mut text = String::new();
    let mut tool_calls = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text { text: t } => {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(t);
            }
            ContentBlock::ToolUse { id, name, input } => tool_calls.push(CcToolCall {
                id: id.clone(),
                r#type: "function".to_owned(),
                function: CcFunction { name: name.clone(), arguments: input.to_string() },
            }),
            ContentBlock::ToolResult { tool_use_id, content, .. } => out.push(CcMessage {
                role: "tool".to_owned(),
                content: Some(content.clone()),
                tool_calls: None,
                tool_call_id: Some(tool_use_id.clone()),
            }),
            ContentBlock::Unknown => {}
        }
    }

    if !text.is_empty() || !tool_calls.is_empty() {
        out.push(CcMessage {
            role: role.to_owned(),
            content: if text.is_empty() { None } else { Some(text) },
            tool_calls: if tool_calls.is_empty() { None } else { Some(tool_calls) },
            tool_call_id: None,
        });
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: CcResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let choice = api
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("empty choices".to_owned()))?;

    let mut content = Vec::new();
    if let Some(text) = choice.message.content {
        if !text.is_empty() {
            content.push(ContentBlock::Text { text });
        }
    }
    for call in choice.message.tool_calls {
        let input = serde_json::from_str(&call.function.arguments)
            .map_err(|e| LlmError::ApiParse(format!("tool arguments: {e}")))?;
        content.push(ContentBlock::ToolUse { id: call.id, name: call.function.name, input });
    }

    Ok(ChatResponse {
        content,
        model: api.model,
        stop_reason: choice.finish_reason,
        input_tokens: api.usage.prompt_tokens,
        output_tokens: api.usage.completion_tokens,
    })
}
