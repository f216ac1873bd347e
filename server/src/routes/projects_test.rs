use super::*;

use crate::llm::types::LlmError;

// =============================================================================
// Status mapping
// =============================================================================

#[test]
fn project_not_found_maps_to_404() {
    let err = ProjectError::NotFound(Uuid::nil());
    assert_eq!(project_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn project_serialize_maps_to_500() {
    let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(project_status(&ProjectError::Serialize(bad)), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn missing_llm_maps_to_503() {
    assert_eq!(generate_status(&GenerateError::LlmNotConfigured), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn provider_failure_maps_to_502() {
    let err = GenerateError::Llm(LlmError::ApiResponse { status: 500, body: "overloaded".to_owned() });
    assert_eq!(generate_status(&err), StatusCode::BAD_GATEWAY);
}
