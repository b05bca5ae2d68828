//! Contact form resolving a listing's landlord and composing a mailto link.

use leptos::prelude::*;

use crate::net::types::{Listing, User};
use crate::util::mailto::mailto_url;

/// Landlord contact box for a listing detail page.
///
/// Resolves the landlord's user record from the listing's owner reference,
/// then offers a message box whose "Send Message" opens the user's mail
/// client. Renders nothing until (and unless) the landlord lookup succeeds.
#[component]
pub fn Contact(listing: Listing) -> impl IntoView {
    let landlord = RwSignal::new(None::<User>);
    let message = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let owner_ref = listing.owner_ref.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user(&owner_ref).await {
                Ok(user) => landlord.set(Some(user)),
                Err(err) => log::error!("landlord lookup failed: {err}"),
            }
        });
    }

    let listing_name = listing.name.clone();

    view! {
        {move || {
            landlord.get().map(|landlord| {
                let email = landlord.email.clone();
                let subject = format!("Regarding {listing_name}");
                let href = move || mailto_url(&email, &subject, &message.get());

                view! {
                    <div class="contact">
                        <p>
                            "Contact "
                            <span class="contact__name">{landlord.username.clone()}</span>
                            " for "
                            <span class="contact__name">{listing_name.to_lowercase()}</span>
                        </p>
                        <textarea
                            class="contact__message"
                            rows="2"
                            placeholder="Enter your message here..."
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        <a class="btn btn--primary" href=href>
                            "Send Message"
                        </a>
                    </div>
                }
            })
        }}
    }
}
