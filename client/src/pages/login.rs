//! Login page with email + password sign-in and account creation.
//!
//! Both buttons drive the same post-auth flow: adopt parked anonymous
//! work, or land on the most recent project, or create a placeholder.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = move || auth.get().loading;

    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |is_sign_up: bool| {
        if auth.get_untracked().loading {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::state::anon_work::StorageAnonWork;
            use crate::util::auth_flow::{ApiAuthGateway, ApiProjectGateway, AuthFlow};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let flow = AuthFlow {
                    auth: ApiAuthGateway,
                    projects: ApiProjectGateway,
                    anon_work: StorageAnonWork,
                    navigate: move |path: &str| navigate(path, NavigateOptions::default()),
                    set_loading: move |on: bool| auth.update(|state| state.loading = on),
                };
                let result = if is_sign_up {
                    flow.sign_up(&email_value, &password_value).await
                } else {
                    flow.sign_in(&email_value, &password_value).await
                };
                match result {
                    Ok(outcome) if outcome.success => {}
                    Ok(outcome) => {
                        info.set(outcome.error.unwrap_or_else(|| "Authentication failed.".to_owned()));
                    }
                    Err(e) => info.set(format!("Request failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (is_sign_up, &navigate);
        }
    };

    let submit_sign_in = submit.clone();
    let submit_sign_up = submit;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"UI Generator"</h1>
                <p class="login-card__subtitle">"Sign in to keep your designs"</p>
                <form
                    class="login-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit_sign_in(false);
                    }
                >
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        "Sign In"
                    </button>
                    <button
                        class="login-button login-button--secondary"
                        type="button"
                        disabled=busy
                        on:click=move |_| submit_sign_up(true)
                    >
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
