//! REST API client for the estate backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! included so the auth session travels along. Server-side (SSR): stubs
//! returning `ApiError::Transport` so callers degrade without crashing
//! hydration.
//!
//! Every user-facing operation follows one protocol: the view flips its
//! loading flag, exactly one request goes out, and the body is decoded once
//! into `Result<T, ApiError>`. Callers never re-inspect a `success` sentinel
//! downstream.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{ApiMessage, Listing, SignInBody, SignUpBody, UpdateUserBody, User};
use crate::config;

/// Join a path onto the configured backend base URL.
pub(crate) fn api_url(path: &str) -> String {
    format!("{}{path}", config::api_base())
}

/// Decode a response body into the expected payload.
///
/// The backend signals application failure with `{"success": false,
/// "message": ...}` inside an otherwise well-formed body (often with a 2xx
/// status), so that envelope is checked before the payload parse. Anything
/// that parses as neither is a transport-class failure.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    #[derive(serde::Deserialize)]
    struct Envelope {
        success: bool,
        #[serde(default)]
        message: String,
    }

    if let Ok(env) = serde_json::from_str::<Envelope>(body) {
        if !env.success {
            return Err(ApiError::Rejected(env.message));
        }
    }
    serde_json::from_str(body).map_err(|e| ApiError::Transport(e.to_string()))
}

/// Decode an acknowledgement body.
///
/// Acknowledgement endpoints are loose about shape: some return the
/// `{success, message}` envelope, some a bare JSON string. Both are accepted;
/// `success: false` still maps to `Rejected`.
fn decode_ack(body: &str) -> Result<ApiMessage, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Transport(e.to_string()))?;

    if value.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        return Err(ApiError::Rejected(message));
    }

    let message = match &value {
        serde_json::Value::String(s) => s.clone(),
        other => other
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned(),
    };
    Ok(ApiMessage {
        success: true,
        message,
    })
}

#[cfg(feature = "hydrate")]
async fn read_body(request: gloo_net::http::RequestBuilder) -> Result<String, ApiError> {
    let resp = request
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    resp.text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_body_json<B: serde::Serialize>(
    request: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<String, ApiError> {
    let resp = request
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    resp.text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// Sign in with email and password; returns the authenticated user record.
pub async fn sign_in(body: &SignInBody) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text =
            read_body_json(gloo_net::http::Request::post(&api_url("/api/auth/signin")), body)
                .await?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        server_stub()
    }
}

/// Create a new account. The backend acknowledges without signing the user in.
pub async fn sign_up(body: &SignUpBody) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text =
            read_body_json(gloo_net::http::Request::post(&api_url("/api/auth/signup")), body)
                .await?;
        decode_ack(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        server_stub()
    }
}

/// Sign out the current user, invalidating the session cookie.
pub async fn sign_out() -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = read_body(gloo_net::http::Request::get(&api_url("/api/auth/signOut"))).await?;
        decode_ack(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Update the signed-in user's profile; returns the updated user record.
pub async fn update_user(id: &str, body: &UpdateUserBody) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/user/update/{id}"));
        let text = read_body_json(gloo_net::http::Request::post(&url), body).await?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, body);
        server_stub()
    }
}

/// Delete the signed-in user's account.
pub async fn delete_user(id: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/user/delete/{id}"));
        let text = read_body(gloo_net::http::Request::delete(&url)).await?;
        decode_ack(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Fetch the listings owned by a user, for the profile page.
pub async fn fetch_user_listings(id: &str) -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/user/listings/{id}"));
        let text = read_body(gloo_net::http::Request::get(&url)).await?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Delete a single listing by id. Only the success flag of the response
/// matters to callers; the rest of the body is ignored.
pub async fn delete_listing(id: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/listing/delete/{id}"));
        let text = read_body(gloo_net::http::Request::delete(&url)).await?;
        decode_ack(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Fetch a single listing by id, for the detail page.
pub async fn fetch_listing(id: &str) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/listing/get/{id}"));
        let text = read_body(gloo_net::http::Request::get(&url)).await?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Fetch a user record by id. Used to resolve a listing's landlord for the
/// contact form.
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/user/{id}"));
        let text = read_body(gloo_net::http::Request::get(&url)).await?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}
