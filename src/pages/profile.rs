//! Profile page: avatar upload, profile update, account deletion, sign-out,
//! and the owned-listings list with per-listing delete.
//!
//! Update, delete, and sign-out run through the session store's event
//! families. The avatar upload and the listings list are page-local state;
//! their outcomes never touch the store.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::listing_row::ListingRow;
use crate::net::types::UpdateUserBody;
use crate::state::listings::ListingsState;
use crate::state::session::{SessionEvent, SessionState};
use crate::state::upload::UploadState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Pending form: only fields the user touched; merged avatar URL included.
    let pending = RwSignal::new(UpdateUserBody::default());
    let upload = RwSignal::new(UploadState::default());
    let listings = RwSignal::new(ListingsState::default());
    let update_flash = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // Anything that clears the session (sign-out, account deletion, or
    // arriving here signed out) lands back on the sign-in page.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.current_user.is_none() {
            navigate("/sign-in", NavigateOptions::default());
        }
    });

    let on_avatar_click = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_ref.get() {
            input.click();
        }
    };

    // Selecting a file uploads immediately; the public URL lands in the
    // pending form, to be persisted by the next profile update.
    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            upload.update(UploadState::start);
            leptos::task::spawn_local(async move {
                match crate::net::storage::upload_avatar(file).await {
                    Ok(result) => {
                        pending.update(|p| p.avatar = Some(result.public_url));
                        upload.update(UploadState::finish);
                    }
                    Err(err) => {
                        log::error!("avatar upload failed: {err}");
                        upload.update(|u| u.fail("Upload failed. Try again."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = session
            .try_update(|s| s.start_for_current_user(SessionEvent::UpdateUserStart))
            .flatten()
        else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let body = pending.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_user(&user.id, &body).await {
                    Ok(updated) => {
                        session.update(|s| s.apply(SessionEvent::UpdateUserSuccess(updated)));
                        update_flash.set(true);
                    }
                    Err(err) => {
                        session
                            .update(|s| s.apply(SessionEvent::UpdateUserFailure(err.to_string())));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
    };

    let on_delete_user = move |_| {
        let Some(user) = session
            .try_update(|s| s.start_for_current_user(SessionEvent::DeleteUserStart))
            .flatten()
        else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_user(&user.id).await {
                    Ok(_) => session.update(|s| s.apply(SessionEvent::DeleteUserSuccess)),
                    Err(err) => {
                        session
                            .update(|s| s.apply(SessionEvent::DeleteUserFailure(err.to_string())));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
    };

    let on_sign_out = move |_| {
        session.update(|s| s.apply(SessionEvent::SignOutStart));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_out().await {
                Ok(_) => session.update(|s| s.apply(SessionEvent::SignOutSuccess)),
                Err(err) => {
                    log::error!("sign out failed: {err}");
                    session.update(|s| s.apply(SessionEvent::SignOutFailure(err.to_string())));
                }
            }
        });
    };

    let on_show_listings = move |_| {
        listings.update(ListingsState::begin_fetch);

        #[cfg(feature = "hydrate")]
        {
            let Some(user) = session.get_untracked().current_user else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_user_listings(&user.id).await {
                    Ok(items) => listings.update(|l| l.set_items(items)),
                    Err(err) => {
                        log::error!("listing fetch failed: {err}");
                        listings.update(|l| l.show_error = true);
                    }
                }
            });
        }
    };

    // Only the success flag of the delete response matters; the local list is
    // the source of what disappears from the page.
    let on_delete_listing = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_listing(&id).await {
                Ok(_) => listings.update(|l| l.remove(&id)),
                Err(err) => log::warn!("listing delete failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let loading = move || session.get().loading;

    let avatar_src = move || {
        pending
            .get()
            .avatar
            .or_else(|| session.get().current_user.and_then(|u| u.avatar_url))
            .unwrap_or_else(|| "/default-avatar.png".to_owned())
    };
    let username_value = move || {
        pending
            .get()
            .username
            .or_else(|| session.get().current_user.map(|u| u.username))
            .unwrap_or_default()
    };
    let email_value = move || {
        pending
            .get()
            .email
            .or_else(|| session.get().current_user.map(|u| u.email))
            .unwrap_or_default()
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>

            <form class="profile-page__form" on:submit=on_submit>
                <input
                    type="file"
                    accept="image/*"
                    hidden=true
                    node_ref=file_ref
                    on:change=on_file_change
                />
                <img
                    class="profile-page__avatar"
                    src=avatar_src
                    alt="profile"
                    on:click=on_avatar_click
                />

                <Show when=move || upload.get().uploading>
                    <p class="profile-page__uploading">"Uploading..."</p>
                </Show>
                <Show when=move || upload.get().error.is_some()>
                    <p class="profile-page__upload-error">
                        {move || upload.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <input
                    class="profile-page__input"
                    type="text"
                    placeholder="Username"
                    prop:value=username_value
                    on:input=move |ev| {
                        pending.update(|p| p.username = Some(event_target_value(&ev)));
                    }
                />
                <input
                    class="profile-page__input"
                    type="email"
                    placeholder="Email"
                    prop:value=email_value
                    on:input=move |ev| {
                        pending.update(|p| p.email = Some(event_target_value(&ev)));
                    }
                />
                <input
                    class="profile-page__input"
                    type="password"
                    placeholder="Password"
                    on:input=move |ev| {
                        pending.update(|p| p.password = Some(event_target_value(&ev)));
                    }
                />

                <button class="btn btn--primary" type="submit" disabled=loading>
                    {move || if loading() { "Loading..." } else { "Update" }}
                </button>
            </form>

            <div class="profile-page__danger">
                <span class="profile-page__danger-link" on:click=on_delete_user>
                    "Delete Account"
                </span>
                <span class="profile-page__danger-link" on:click=on_sign_out>
                    "Sign Out"
                </span>
            </div>

            <Show when=move || session.get().error.is_some()>
                <p class="profile-page__error">
                    {move || session.get().error.unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || update_flash.get()>
                <p class="profile-page__flash">"User updated successfully"</p>
            </Show>

            <button class="profile-page__show-listings" on:click=on_show_listings>
                "Show Listings"
            </button>
            <Show when=move || listings.get().show_error>
                <p class="profile-page__error">"Error showing listings"</p>
            </Show>

            {move || {
                let items = listings.get().items;
                (!items.is_empty()).then(|| {
                    view! {
                        <div class="profile-page__listings">
                            <h2>"Your Listings"</h2>
                            {items
                                .into_iter()
                                .map(|listing| {
                                    view! {
                                        <ListingRow listing=listing on_delete=on_delete_listing/>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
