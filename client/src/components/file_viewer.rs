//! File tree and code viewer over the virtual file system.

use leptos::prelude::*;

use crate::state::workspace::WorkspaceState;

/// Generated-file list plus the contents of the selected file.
#[component]
pub fn FileViewer(workspace: RwSignal<WorkspaceState>) -> impl IntoView {
    view! {
        <div class="file-viewer">
            <div class="file-viewer__tree">
                <For
                    each=move || workspace.get().file_paths()
                    key=|path| path.clone()
                    children=move |path| {
                        let select = path.clone();
                        let label = path.clone();
                        let is_selected = {
                            let path = path.clone();
                            move || workspace.get().selected_file.as_deref() == Some(path.as_str())
                        };
                        view! {
                            <button
                                class="file-viewer__entry"
                                class:file-viewer__entry--selected=is_selected
                                on:click=move |_| {
                                    workspace.update(|ws| ws.selected_file = Some(select.clone()));
                                }
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
            <pre class="file-viewer__code">
                <code>{move || workspace.get().selected_content().unwrap_or_default().to_owned()}</code>
            </pre>
        </div>
    }
}
