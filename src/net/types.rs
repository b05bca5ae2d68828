#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user record as the backend stores it.
///
/// Owned exclusively by the session store: replaced wholesale on
/// sign-in/update, cleared on sign-out/delete. No other component keeps a
/// copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "avatar", default)]
    pub avatar_url: Option<String>,
}

/// A listing record. Opaque to the session store; pages hold these only
/// transiently and discard them on navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
    #[serde(rename = "userRef")]
    pub owner_ref: String,
}

/// Acknowledgement envelope returned by sign-out, account delete, and
/// listing delete.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Public URL handed back by the storage gateway after an upload. Ephemeral:
/// merged into the profile form's pending fields, never stored in the
/// session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadResult {
    pub public_url: String,
}

/// Request body for `POST /api/auth/signin`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SignInBody {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/auth/signup`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SignUpBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/user/update/:id`. Only fields the user
/// actually changed are serialized; untouched fields stay `None` and are
/// omitted from the JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateUserBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
