//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual pages can depend on small focused
//! models. The session store is app-wide (provided via context); listings and
//! upload state live only on the profile page and are discarded with it.

pub mod listings;
pub mod session;
pub mod upload;
