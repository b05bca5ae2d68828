//! Startup configuration baked in at build time.
//!
//! The backend base URL and the storage gateway URL/API key are compile-time
//! settings, read once and never re-read. An empty base URL means same-origin
//! relative requests, which is the deployed default behind the reverse proxy.

/// Base URL of the REST backend, prepended to every `/api/...` path.
pub fn api_base() -> &'static str {
    option_env!("ESTATE_API_URL").unwrap_or("")
}

/// Base URL of the object-storage gateway (Supabase storage REST surface).
pub fn storage_url() -> &'static str {
    option_env!("ESTATE_STORAGE_URL").unwrap_or("/storage/v1")
}

/// API key sent to the storage gateway on uploads.
pub fn storage_key() -> &'static str {
    option_env!("ESTATE_STORAGE_KEY").unwrap_or("")
}
