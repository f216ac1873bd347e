//! Anonymous workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors can generate components without an account. Every mutation is
//! parked in `localStorage` so a later sign-in can adopt the work into a
//! real project.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::file_viewer::FileViewer;
use crate::state::anon_work::{self, AnonWork};
use crate::state::workspace::WorkspaceState;

fn park(workspace: RwSignal<WorkspaceState>) {
    let ws = workspace.get_untracked();
    anon_work::set_anon_work_data(&AnonWork {
        messages: ws.messages,
        file_system_data: Some(ws.data),
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let workspace = RwSignal::new(WorkspaceState::default());
    let notice = RwSignal::new(String::new());

    // Restore parked work once on hydration; no-op on the server.
    Effect::new(move || {
        if let Some(work) = anon_work::get_anon_work_data() {
            workspace.update(|ws| {
                ws.messages = work.messages;
                ws.data = work.file_system_data.unwrap_or_default();
                ws.selected_file = ws.file_paths().first().cloned();
            });
        }
    });

    let on_send = Callback::new(move |text: String| {
        let mut request = None;
        workspace.update(|ws| {
            request = Some(ws.push_user_message(&text));
            ws.pending = true;
        });
        let Some(request) = request else { return };
        park(workspace);
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::anon_chat(&request).await {
                Ok(response) => {
                    workspace.update(|ws| {
                        ws.pending = false;
                        ws.apply_response(response);
                    });
                    park(workspace);
                }
                Err(e) => {
                    workspace.update(|ws| ws.pending = false);
                    notice.set(format!("Generation failed: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            workspace.update(|ws| ws.pending = false);
        }
    });

    view! {
        <div class="workspace-page">
            <header class="workspace-header">
                <h1>"UI Generator"</h1>
                <a class="workspace-header__link" href="/login">"Sign In"</a>
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
