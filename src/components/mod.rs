//! Reusable view components shared across pages.

pub mod contact;
pub mod header;
pub mod listing_row;
pub mod oauth;
