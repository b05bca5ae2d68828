//! Object-storage gateway client for avatar uploads.
//!
//! Talks to a Supabase-style storage REST surface: one POST with the file
//! bytes and an upsert header, then the object is reachable at a public URL
//! derived from its key. Upload failures never touch the session store; the
//! profile page records them in its local upload state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::UploadResult;
use crate::config;

const BUCKET: &str = "avatar";

/// Storage object key: upload timestamp plus the original filename, so
/// re-uploads of the same file get distinct keys while `x-upsert` still
/// permits overwriting an identical one.
pub fn object_key(now_ms: f64, filename: &str) -> String {
    format!("{}-{filename}", now_ms as u64)
}

/// Externally reachable URL of an uploaded object.
pub fn public_url(key: &str) -> String {
    format!("{}/object/public/{BUCKET}/{key}", config::storage_url())
}

/// Extract a displayable message from a storage gateway error response,
/// preferring the `message` field, then `error`, then the HTTP status.
fn upload_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(msg) = value.get(field).and_then(serde_json::Value::as_str) {
                return msg.to_owned();
            }
        }
    }
    format!("upload failed with status {status}")
}

/// Upload an avatar image and return its public URL.
///
/// One shot, no retry: a failed upload surfaces as `ApiError::Upload` and the
/// caller's form keeps whatever avatar it had before.
#[cfg(feature = "hydrate")]
pub async fn upload_avatar(file: web_sys::File) -> Result<UploadResult, ApiError> {
    let key = object_key(js_sys::Date::now(), &file.name());
    let url = format!("{}/object/{BUCKET}/{key}", config::storage_url());

    let resp = gloo_net::http::Request::post(&url)
        .header("apikey", config::storage_key())
        .header("authorization", &format!("Bearer {}", config::storage_key()))
        .header("x-upsert", "true")
        .header("cache-control", "3600")
        .body(file)
        .map_err(|e| ApiError::Upload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Upload(upload_error_message(resp.status(), &body)));
    }

    Ok(UploadResult {
        public_url: public_url(&key),
    })
}
