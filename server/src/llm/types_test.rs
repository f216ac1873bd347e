use super::*;

fn response(content: Vec<ContentBlock>) -> ChatResponse {
    ChatResponse {
        content,
        model: "test-model".to_owned(),
        stop_reason: "end_turn".to_owned(),
        input_tokens: 10,
        output_tokens: 20,
    }
}

// =============================================================================
// ChatResponse::text
// =============================================================================

#[test]
fn text_empty_content() {
    assert_eq!(response(vec![]).text(), "");
}

#[test]
fn text_joins_text_blocks() {
    let resp = response(vec![
        ContentBlock::Text { text: "first".to_owned() },
        ContentBlock::Text { text: "second".to_owned() },
    ]);
    assert_eq!(resp.text(), "first\nsecond");
}

#[test]
fn text_skips_tool_blocks() {
    let resp = response(vec![
        ContentBlock::ToolUse {
            id: "t1".to_owned(),
            name: "write_file".to_owned(),
            input: serde_json::json!({}),
        },
        ContentBlock::Text { text: "done".to_owned() },
    ]);
    assert_eq!(resp.text(), "done");
}

// =============================================================================
// ChatResponse::tool_uses
// =============================================================================

#[test]
fn tool_uses_preserves_order() {
    let resp = response(vec![
        ContentBlock::ToolUse {
            id: "a".to_owned(),
            name: "write_file".to_owned(),
            input: serde_json::json!({ "path": "/App.jsx" }),
        },
        ContentBlock::Text { text: "and".to_owned() },
        ContentBlock::ToolUse {
            id: "b".to_owned(),
            name: "delete_file".to_owned(),
            input: serde_json::json!({ "path": "/old.jsx" }),
        },
    ]);
    let uses = resp.tool_uses();
    assert_eq!(uses.len(), 2);
    assert_eq!(uses[0].0, "a");
    assert_eq!(uses[0].1, "write_file");
    assert_eq!(uses[1].1, "delete_file");
}

// =============================================================================
// SERDE SHAPES
// =============================================================================

#[test]
fn content_block_text_round_trip() {
    let json = r#"{"type":"text","text":"hello"}"#;
    let block: ContentBlock = serde_json::from_str(json).unwrap();
    assert!(matches!(block, ContentBlock::Text { ref text } if text == "hello"));
}

#[test]
fn content_block_unknown_type_tolerated() {
    let json = r#"{"type":"server_tool_use","id":"x"}"#;
    let block: ContentBlock = serde_json::from_str(json).unwrap();
    assert!(matches!(block, ContentBlock::Unknown));
}

#[test]
fn message_user_text_serializes_as_string_content() {
    let msg = Message::user_text("make a button");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "make a button");
}
