//! Sign-in page. The one page whose whole request cycle runs through the
//! session store: start before the request, success or failure after.

use leptos::prelude::*;

use crate::components::oauth::OauthButton;
use crate::state::session::{SessionEvent, SessionState};

/// Email/password sign-in form with OAuth alternative.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.update(|s| s.apply(SessionEvent::SignInStart));

        #[cfg(feature = "hydrate")]
        {
            let body = crate::net::types::SignInBody {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&body).await {
                    Ok(user) => {
                        session.update(|s| s.apply(SessionEvent::SignInSuccess(user)));
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        session.update(|s| s.apply(SessionEvent::SignInFailure(err.to_string())));
                    }
                }
            });
        }
    };

    let loading = move || session.get().loading;

    view! {
        <div class="auth-page">
            <h1>"Sign In"</h1>
            <form class="auth-page__form" on:submit=on_submit>
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
                <button class="btn btn--primary" type="submit" disabled=loading>
                    {move || if loading() { "Loading..." } else { "Sign In" }}
                </button>
                <OauthButton/>
            </form>
            <p class="auth-page__switch">
                "Dont have an account? " <a href="/sign-up">"Sign Up"</a>
            </p>
            <Show when=move || session.get().error.is_some()>
                <p class="auth-page__error">
                    {move || session.get().error.unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
