//! Row component for a listing in the profile page's "Your Listings" section.

use leptos::prelude::*;

use crate::net::types::Listing;

/// Cover image, name, and a delete action for one owned listing.
#[component]
pub fn ListingRow(listing: Listing, on_delete: Callback<String>) -> impl IntoView {
    let href = format!("/listing/{}", listing.id);
    let cover = listing.image_urls.first().cloned().unwrap_or_default();
    let id = listing.id.clone();

    view! {
        <div class="listing-row">
            <a href=href.clone()>
                <img class="listing-row__cover" src=cover alt="listing cover"/>
            </a>
            <a class="listing-row__name" href=href>
                {listing.name}
            </a>
            <button
                class="listing-row__delete"
                on:click=move |_| on_delete.run(id.clone())
            >
                "Delete"
            </button>
        </div>
    }
}
