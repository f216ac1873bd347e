use super::*;
use shared::FileNode;

#[test]
fn prompt_names_the_entrypoint() {
    assert!(GENERATION_PROMPT.contains("/App.jsx"));
    assert!(GENERATION_PROMPT.contains("Tailwind"));
    assert!(GENERATION_PROMPT.contains("'@/'"));
}

#[test]
fn empty_project_prompts_for_app_jsx() {
    let data = FileSystemData::new();
    let system = build_system_prompt(&data);
    assert!(system.starts_with(GENERATION_PROMPT));
    assert!(system.contains("The project is empty"));
}

#[test]
fn existing_files_are_listed() {
    let mut data = FileSystemData::new();
    data.insert("/".to_owned(), FileNode::directory());
    data.insert("/App.jsx".to_owned(), FileNode::file("x"));
    data.insert("/components/Button.jsx".to_owned(), FileNode::file("y"));

    let system = build_system_prompt(&data);
    assert!(system.contains("- /App.jsx"));
    assert!(system.contains("- /components/Button.jsx"));
    // Directories are not listed as files.
    assert!(!system.contains("- /\n"));
}
