use std::collections::VecDeque;
use std::sync::Mutex;

use super::*;
use crate::llm::types::{ChatResponse, LlmError, Tool};

/// Scripted model: pops one canned response per `chat` call and records the
/// system prompts it was shown.
struct ScriptedModel {
    responses: Mutex<VecDeque<ChatResponse>>,
    systems: Mutex<Vec<String>>,
}

impl ScriptedModel {
    fn new(responses: Vec<ChatResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            systems: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl LlmChat for ScriptedModel {
    async fn chat(
        &self,
        _max_tokens: u32,
        system: &str,
        _messages: &[Message],
        _tools: Option<&[Tool]>,
    ) -> Result<ChatResponse, LlmError> {
        self.systems.lock().unwrap().push(system.to_owned());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::ApiRequest("script exhausted".to_owned()))
    }
}

fn text_response(text: &str) -> ChatResponse {
    ChatResponse {
        content: vec![ContentBlock::Text { text: text.to_owned() }],
        model: "scripted".to_owned(),
        stop_reason: "end_turn".to_owned(),
        input_tokens: 0,
        output_tokens: 0,
    }
}

fn tool_response(name: &str, input: serde_json::Value) -> ChatResponse {
    ChatResponse {
        content: vec![ContentBlock::ToolUse { id: "toolu_1".to_owned(), name: name.to_owned(), input }],
        model: "scripted".to_owned(),
        stop_reason: "tool_use".to_owned(),
        input_tokens: 0,
        output_tokens: 0,
    }
}

fn user_message(content: &str) -> ChatMessage {
    ChatMessage { id: "1".to_owned(), role: MessageRole::User, content: content.to_owned() }
}

// =============================================================================
// run_generation
// =============================================================================

#[tokio::test]
async fn text_only_reply_leaves_snapshot_unchanged() {
    let model = ScriptedModel::new(vec![text_response("Here you go.")]);
    let mut data = FileSystemData::new();
    data.insert("/".to_owned(), FileNode::directory());
    data.insert("/App.jsx".to_owned(), FileNode::file("export default function App() {}"));

    let outcome = run_generation(&model, &[user_message("make a button")], data.clone())
        .await
        .unwrap();

    assert_eq!(outcome.message.role, MessageRole::Assistant);
    assert_eq!(outcome.message.content, "Here you go.");
    assert_eq!(outcome.data, data);
}

#[tokio::test]
async fn write_file_tool_mutates_snapshot_then_returns_text() {
    let model = ScriptedModel::new(vec![
        tool_response(
            TOOL_WRITE_FILE,
            serde_json::json!({ "path": "/App.jsx", "content": "export default function App() {}" }),
        ),
        text_response("Created App.jsx"),
    ]);

    let outcome = run_generation(&model, &[user_message("new app")], FileSystemData::new())
        .await
        .unwrap();

    assert_eq!(outcome.message.content, "Created App.jsx");
    assert_eq!(
        outcome.data.get("/App.jsx").and_then(|n| n.content.as_deref()),
        Some("export default function App() {}")
    );
    assert_eq!(outcome.data.get("/"), Some(&FileNode::directory()));
}

#[tokio::test]
async fn system_prompt_reflects_files_written_mid_round() {
    let model = ScriptedModel::new(vec![
        tool_response(TOOL_WRITE_FILE, serde_json::json!({ "path": "/App.jsx", "content": "x" })),
        text_response("done"),
    ]);

    run_generation(&model, &[user_message("go")], FileSystemData::new())
        .await
        .unwrap();

    let systems = model.systems.lock().unwrap();
    assert_eq!(systems.len(), 2);
    assert!(systems[0].contains("The project is empty"));
    assert!(systems[1].contains("- /App.jsx"));
}

#[tokio::test]
async fn provider_error_propagates() {
    let model = ScriptedModel::new(vec![]);
    let err = run_generation(&model, &[user_message("hi")], FileSystemData::new())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Llm(_)));
}

// =============================================================================
// execute_tool
// =============================================================================

#[test]
fn write_file_creates_parent_directories() {
    let mut data = FileSystemData::new();
    let (result, is_error) = execute_tool(
        &mut data,
        TOOL_WRITE_FILE,
        &serde_json::json!({ "path": "/components/ui/Button.jsx", "content": "b" }),
    );
    assert!(!is_error, "{result}");
    assert_eq!(data.get("/components"), Some(&FileNode::directory()));
    assert_eq!(data.get("/components/ui"), Some(&FileNode::directory()));
    assert!(data.contains_key("/components/ui/Button.jsx"));
}

#[test]
fn write_file_rejects_relative_path() {
    let mut data = FileSystemData::new();
    let (_, is_error) = execute_tool(&mut data, TOOL_WRITE_FILE, &serde_json::json!({ "path": "App.jsx", "content": "x" }));
    assert!(is_error);
    assert!(data.is_empty());
}

#[test]
fn read_file_returns_content_or_error() {
    let mut data = FileSystemData::new();
    data.insert("/App.jsx".to_owned(), FileNode::file("hello"));

    let (content, is_error) = execute_tool(&mut data, TOOL_READ_FILE, &serde_json::json!({ "path": "/App.jsx" }));
    assert!(!is_error);
    assert_eq!(content, "hello");

    let (_, is_error) = execute_tool(&mut data, TOOL_READ_FILE, &serde_json::json!({ "path": "/missing.jsx" }));
    assert!(is_error);
}

#[test]
fn delete_file_removes_directory_children() {
    let mut data = FileSystemData::new();
    data.insert("/components".to_owned(), FileNode::directory());
    data.insert("/components/A.jsx".to_owned(), FileNode::file("a"));
    data.insert("/components/B.jsx".to_owned(), FileNode::file("b"));
    data.insert("/App.jsx".to_owned(), FileNode::file("app"));

    let (_, is_error) = execute_tool(&mut data, TOOL_DELETE_FILE, &serde_json::json!({ "path": "/components" }));
    assert!(!is_error);
    assert!(!data.contains_key("/components"));
    assert!(!data.contains_key("/components/A.jsx"));
    assert!(data.contains_key("/App.jsx"));
}

#[test]
fn unknown_tool_reports_error() {
    let mut data = FileSystemData::new();
    let (content, is_error) = execute_tool(&mut data, "format_disk", &serde_json::json!({ "path": "/" }));
    assert!(is_error);
    assert!(content.contains("unknown tool"));
}
