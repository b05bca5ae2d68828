#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::types::Listing;

/// Listings shown on the profile page after "Show Listings".
///
/// Held only while the page is mounted and discarded on navigation; the
/// backend stays the owner of listing data.
#[derive(Clone, Debug, Default)]
pub struct ListingsState {
    pub items: Vec<Listing>,
    pub show_error: bool,
}

impl ListingsState {
    /// A refetch clears any stale error before the request goes out, so a
    /// retry doesn't show the previous failure while in flight.
    pub fn begin_fetch(&mut self) {
        self.show_error = false;
    }

    /// Replace the list with a fresh fetch result and clear the error flag.
    pub fn set_items(&mut self, items: Vec<Listing>) {
        self.items = items;
        self.show_error = false;
    }

    /// Drop exactly the listing with `id`; every other entry stays put.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|listing| listing.id != id);
    }
}
