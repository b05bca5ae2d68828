//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Home page with a pitch line and session-aware entry links.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <h1>"Find your next " <span class="home-page__accent">"perfect"</span> " place"</h1>
            <p>
                "Maern Estate helps you find homes to rent or buy, "
                "and landlords to talk to."
            </p>
            {move || {
                if session.get().current_user.is_some() {
                    view! { <a class="btn btn--primary" href="/profile">"Go to your profile"</a> }
                        .into_any()
                } else {
                    view! { <a class="btn btn--primary" href="/sign-in">"Get started"</a> }
                        .into_any()
                }
            }}
        </div>
    }
}
