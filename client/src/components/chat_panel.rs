//! Chat panel: transcript plus the prompt input.

use leptos::prelude::*;
use shared::MessageRole;

use crate::components::markdown::render_markdown_html;
use crate::state::workspace::WorkspaceState;

/// Transcript and prompt input for one workspace.
#[component]
pub fn ChatPanel(workspace: RwSignal<WorkspaceState>, on_send: Callback<String>) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if workspace.get_untracked().pending {
            return;
        }
        let text = draft.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }
        draft.set(String::new());
        on_send.run(text);
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages">
                <For
                    each=move || workspace.get().messages
                    key=|message| message.id.clone()
                    children=move |message| {
                        let is_assistant = message.role == MessageRole::Assistant;
                        let content = message.content.clone();
                        view! {
                            <div class="chat-message" class:chat-message--assistant=is_assistant>
                                {if is_assistant {
                                    let rendered = render_markdown_html(&content);
                                    view! { <div class="chat-message__body" inner_html=rendered></div> }.into_any()
                                } else {
                                    view! { <div class="chat-message__body">{content}</div> }.into_any()
                                }}
                            </div>
                        }
                    }
                />
                <Show when=move || workspace.get().pending>
                    <div class="chat-message chat-message--pending">"Generating..."</div>
                </Show>
            </div>
            <form class="chat-panel__form" on:submit=submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Describe the component you want..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="chat-panel__send" type="submit" disabled=move || workspace.get().pending>
                    "Send"
                </button>
            </form>
        </div>
    }
}
