//! Listing detail page hosting the landlord contact flow.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::contact::Contact;
use crate::net::types::Listing;
use crate::state::session::SessionState;

/// Listing page — fetches the listing named by the route parameter and shows
/// its images plus a contact entry for signed-in visitors who don't own it.
#[component]
pub fn ListingPage() -> impl IntoView {
    let params = use_params_map();
    let listing = RwSignal::new(None::<Listing>);
    let load_error = RwSignal::new(None::<String>);

    // Fetch on mount and whenever the route param changes.
    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        listing.set(None);
        load_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_listing(&id).await {
                Ok(found) => listing.set(Some(found)),
                Err(err) => load_error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="listing-page">
            {move || {
                if let Some(err) = load_error.get() {
                    return view! { <p class="listing-page__error">{err}</p> }.into_any();
                }
                match listing.get() {
                    None => view! { <p class="listing-page__loading">"Loading..."</p> }.into_any(),
                    Some(found) => view! { <ListingDetail listing=found/> }.into_any(),
                }
            }}
        </div>
    }
}

/// Loaded listing content: name, image gallery, and the contact section.
#[component]
fn ListingDetail(listing: Listing) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let show_contact = RwSignal::new(false);

    let owner_ref = listing.owner_ref.clone();
    let name = listing.name.clone();
    let images = listing.image_urls.clone();
    let contact_listing = listing;

    // Contacting yourself about your own listing makes no sense; signed-out
    // visitors are sent through sign-in first by the pages that matter.
    let can_contact = move || {
        session
            .get()
            .current_user
            .as_ref()
            .is_some_and(|user| user.id != owner_ref)
    };

    view! {
        <div class="listing-page__detail">
            <h1>{name}</h1>
            <div class="listing-page__images">
                {images
                    .into_iter()
                    .map(|url| view! { <img class="listing-page__image" src=url alt="listing"/> })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || can_contact() && !show_contact.get()>
                <button class="btn btn--primary" on:click=move |_| show_contact.set(true)>
                    "Contact landlord"
                </button>
            </Show>
            <Show when=move || show_contact.get()>
                <Contact listing=contact_listing.clone()/>
            </Show>
        </div>
    }
}
