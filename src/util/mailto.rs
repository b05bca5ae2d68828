//! `mailto:` URL construction for the landlord contact flow.
//!
//! Sending a message is just opening the user's mail client with the subject
//! and body prefilled; nothing goes through the backend.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

/// Build a `mailto:` URL with percent-encoded subject and body query
/// parameters.
pub fn mailto_url(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
