//! Persisted project workspace.
//!
//! Loads the project named by the route, then runs generation rounds
//! through the persisted chat endpoint so every round is saved.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_panel::ChatPanel;
use crate::components::file_viewer::FileViewer;
use crate::state::workspace::WorkspaceState;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let workspace = RwSignal::new(WorkspaceState::default());
    let name = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    // Load the project whenever the route id changes.
    Effect::new(move || {
        let id = project_id.get();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_project(&id).await {
                Ok(detail) => {
                    name.set(detail.name);
                    workspace.update(|ws| {
                        ws.messages = detail.messages;
                        ws.data = detail.data;
                        ws.selected_file = None;
                        ws.selected_file = ws.file_paths().first().cloned();
                    });
                }
                Err(e) => notice.set(format!("Failed to load project: {e}")),
            }
        });
    });

    let on_send = Callback::new(move |text: String| {
        let id = project_id.get_untracked();
        let mut request = None;
        workspace.update(|ws| {
            request = Some(ws.push_user_message(&text));
            ws.pending = true;
        });
        let Some(request) = request else { return };
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::project_chat(&id, &request).await {
                Ok(response) => {
                    workspace.update(|ws| {
                        ws.pending = false;
                        ws.apply_response(response);
                    });
                }
                Err(e) => {
                    workspace.update(|ws| ws.pending = false);
                    notice.set(format!("Generation failed: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, request);
            workspace.update(|ws| ws.pending = false);
        }
    });

    view! {
        <div class="workspace-page">
            <header class="workspace-header">
                <h1>{move || name.get()}</h1>
                <a class="workspace-header__link" href="/">"Home"</a>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="workspace-notice">{move || notice.get()}</p>
            </Show>
            <div class="workspace-body">
                <ChatPanel workspace=workspace on_send=on_send/>
                <FileViewer workspace=workspace/>
            </div>
        </div>
    }
}
