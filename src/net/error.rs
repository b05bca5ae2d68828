use thiserror::Error;

/// Failure taxonomy at the network boundary.
///
/// Every variant renders to the end user as plain text via `Display`; the
/// kinds exist so call sites can log and test precisely, not so the UI can
/// branch on them. Nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network unreachable, or a body that does not parse as the expected JSON.
    #[error("{0}")]
    Transport(String),

    /// Well-formed response carrying `success: false` plus a server message.
    #[error("{0}")]
    Rejected(String),

    /// The object-storage gateway returned an error.
    #[error("{0}")]
    Upload(String),
}
