//! Tool definitions exposed to the model for editing the virtual file
//! system. Execution lives in `services::generate`; this module only owns
//! the schemas.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;

use serde_json::json;

use super::types::Tool;

pub const TOOL_WRITE_FILE: &str = "write_file";
pub const TOOL_READ_FILE: &str = "read_file";
pub const TOOL_DELETE_FILE: &str = "delete_file";

/// All tools available during component generation.
#[must_use]
pub fn generation_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: TOOL_WRITE_FILE.to_owned(),
            description: "Create or replace a file in the virtual file system. \
                          Parent directories are created automatically."
                .to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Absolute path, e.g. /App.jsx or /components/Button.jsx"
                    },
                    "content": {
                        "type": "string",
                        "description": "Full contents of the file"
                    }
                },
                "required": ["path", "content"]
            }),
        },
        Tool {
            name: TOOL_READ_FILE.to_owned(),
            description: "Read the current contents of a file in the virtual file system.".to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Absolute path of the file to read" }
                },
                "required": ["path"]
            }),
        },
        Tool {
            name: TOOL_DELETE_FILE.to_owned(),
            description: "Delete a file or directory (and its children) from the virtual file system.".to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Absolute path to delete" }
                },
                "required": ["path"]
            }),
        },
    ]
}
