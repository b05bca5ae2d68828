//! OAuth entry button — clicking it navigates to the backend's Google OAuth
//! endpoint, which signs the user in and redirects back with a session cookie.

use leptos::prelude::*;

use crate::config;

/// "Continue with Google" button used on the sign-in and sign-up pages.
#[component]
pub fn OauthButton() -> impl IntoView {
    let href = format!("{}/api/auth/google", config::api_base());

    view! {
        <a class="btn btn--oauth" href=href>
            "Continue with Google"
        </a>
    }
}
