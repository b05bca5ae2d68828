//! Route-level pages.

pub mod home;
pub mod listing;
pub mod profile;
pub mod sign_in;
pub mod sign_up;
