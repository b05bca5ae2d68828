//! Top navigation bar showing the session's avatar or a sign-in link.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Site header with brand link and session-aware navigation.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                <span class="header__brand-accent">"Maern"</span>
                "Estate"
            </a>
            <nav class="header__nav">
                <a href="/">"Home"</a>
                {move || match session.get().current_user {
                    Some(user) => {
                        let avatar = user
                            .avatar_url
                            .unwrap_or_else(|| "/default-avatar.png".to_owned());
                        view! {
                            <a href="/profile">
                                <img class="header__avatar" src=avatar alt="profile"/>
                            </a>
                        }
                            .into_any()
                    }
                    None => view! { <a href="/sign-in">"Sign In"</a> }.into_any(),
                }}
            </nav>
        </header>
    }
}
