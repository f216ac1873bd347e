//! Generation service — LLM prompt → tool calls → virtual-FS mutations.
//!
//! DESIGN
//! ======
//! Sends the chat transcript plus the current snapshot's file listing to
//! the model with the file-editing tools, executes returned tool calls
//! against the snapshot, and loops (bounded) until the model answers with
//! plain text. The caller decides whether the mutated snapshot is persisted
//! (project chat) or returned to the browser (anonymous chat).

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;

use std::sync::OnceLock;

use shared::{ChatMessage, FileNode, FileSystemData, MessageRole};
use uuid::Uuid;

use crate::llm::LlmChat;
use crate::llm::generation::build_system_prompt;
use crate::llm::tools::{TOOL_DELETE_FILE, TOOL_READ_FILE, TOOL_WRITE_FILE, generation_tools};
use crate::llm::types::{Content, ContentBlock, Message};

const DEFAULT_MAX_TOOL_ITERATIONS: usize = 10;
const DEFAULT_MAX_TOKENS: u32 = 8192;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn max_tool_iterations() -> usize {
    static VALUE: OnceLock<usize> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("GENERATION_MAX_TOOL_ITERATIONS", DEFAULT_MAX_TOOL_ITERATIONS))
}

fn max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("GENERATION_MAX_TOKENS", DEFAULT_MAX_TOKENS))
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] crate::llm::types::LlmError),
}

/// Result of one generation round: the assistant's reply and the snapshot
/// after any tool-driven edits.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub message: ChatMessage,
    pub data: FileSystemData,
}

fn to_llm_messages(messages: &[ChatMessage]) -> Vec<Message> {
    messages
        .iter()
        .map(|m| Message {
            role: match m.role {
                MessageRole::User => "user".to_owned(),
                MessageRole::Assistant => "assistant".to_owned(),
            },
            content: Content::Text(m.content.clone()),
        })
        .collect()
}

/// Insert every ancestor directory of `path` that is not already present.
fn ensure_parent_directories(data: &mut FileSystemData, path: &str) {
    data.entry("/".to_owned()).or_insert_with(FileNode::directory);

    let mut prefix = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let next = format!("{prefix}/{segment}");
        if next != path {
            data.entry(next.clone()).or_insert_with(FileNode::directory);
        }
        prefix = next;
    }
}

/// Execute a single tool call against the snapshot.
///
/// Returns the tool-result content and whether it is an error. Tool
/// failures go back to the model as results, they do not abort the round.
fn execute_tool(data: &mut FileSystemData, name: &str, input: &serde_json::Value) -> (String, bool) {
    let path = input["path"].as_str().unwrap_or_default();
    if !path.starts_with('/') {
        return (format!("invalid path: {path:?} (must be absolute)"), true);
    }

    match name {
        TOOL_WRITE_FILE => {
            let Some(content) = input["content"].as_str() else {
                return ("missing content".to_owned(), true);
            };
            ensure_parent_directories(data, path);
            data.insert(path.to_owned(), FileNode::file(content));
            (format!("wrote {path}"), false)
        }
        TOOL_READ_FILE => match data.get(path).and_then(|node| node.content.clone()) {
            Some(content) => (content, false),
            None => (format!("file not found: {path}"), true),
        },
        TOOL_DELETE_FILE => {
            if data.remove(path).is_none() {
                return (format!("file not found: {path}"), true);
            }
            // Drop any children if a directory was removed.
            let child_prefix = format!("{path}/");
            data.retain(|p, _| !p.starts_with(&child_prefix));
            (format!("deleted {path}"), false)
        }
        other => (format!("unknown tool: {other}"), true),
    }
}

/// Run one generation round against the model.
///
/// # Errors
///
/// Returns an error if the provider call fails; tool execution failures are
/// reported back to the model instead of failing the round.
pub async fn run_generation(
    llm: &dyn LlmChat,
    messages: &[ChatMessage],
    mut data: FileSystemData,
) -> Result<GenerateOutcome, GenerateError> {
    let tools = generation_tools();
    let mut conversation = to_llm_messages(messages);
    let mut last_text = String::new();

    for _ in 0..max_tool_iterations() {
        let system = build_system_prompt(&data);
        let response = llm
            .chat(max_tokens(), &system, &conversation, Some(&tools))
            .await?;

        last_text = response.text();
        let uses: Vec<(String, String, serde_json::Value)> = response
            .tool_uses()
            .into_iter()
            .map(|(id, name, input)| (id.to_owned(), name.to_owned(), input.clone()))
            .collect();
        if uses.is_empty() {
            break;
        }

        conversation.push(Message::assistant_blocks(response.content.clone()));

        let mut results = Vec::with_capacity(uses.len());
        for (id, name, input) in &uses {
            let (content, is_error) = execute_tool(&mut data, name, input);
            if is_error {
                tracing::warn!(tool = %name, result = %content, "generation tool call failed");
            }
            results.push(ContentBlock::ToolResult {
                tool_use_id: id.clone(),
                content,
                is_error: is_error.then_some(true),
            });
        }
        conversation.push(Message { role: "user".to_owned(), content: Content::Blocks(results) });
    }

    let message = ChatMessage {
        id: Uuid::new_v4().to_string(),
        role: MessageRole::Assistant,
        content: last_text,
    };
    Ok(GenerateOutcome { message, data })
}
