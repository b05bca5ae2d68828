//! Sign-up page. Account creation does not sign the user in, so this page
//! keeps its own loading/error signals instead of going through the session
//! store, and navigates to sign-in on success.

use leptos::prelude::*;

use crate::components::oauth::OauthButton;

/// Username/email/password registration form with OAuth alternative.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let body = crate::net::types::SignUpBody {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&body).await {
                    Ok(_) => {
                        loading.set(false);
                        error.set(None);
                        navigate("/sign-in", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Sign Up"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <input
                    class="auth-page__input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-page__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-page__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Loading..." } else { "Sign Up" }}
                </button>
                <OauthButton/>
            </form>
            <p class="auth-page__switch">
                "Have an account? " <a href="/sign-in">"Sign In"</a>
            </p>
            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
