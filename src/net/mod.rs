//! Network layer: REST API client, object-storage gateway, and wire types.
//!
//! The backend's ad-hoc `success: false` sentinel is decoded exactly once
//! here into `Result<T, ApiError>`; nothing downstream re-inspects response
//! bodies.

pub mod api;
pub mod error;
pub mod storage;
pub mod types;
