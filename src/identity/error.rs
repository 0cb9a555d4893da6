//! Sign-in failure taxonomy

use thiserror::Error;

/// Substring older identity backends embed in their invalid-credentials
/// status message. Matched in addition to the status code so detection
/// keeps working against backends that report `Unknown`.
const INVALID_CREDENTIALS_MARKER: &str = "Invalid login credentials";

/// User-facing text for rejected credentials; the backend message is
/// intentionally withheld here.
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Generic retry text for failures that are not the user's fault
const UNEXPECTED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Classified sign-in failure
#[derive(Debug, Error)]
pub enum SignInError {
    /// The identity service rejected the credentials
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Any other failure the identity service reported with a message
    #[error("sign-in rejected: {0}")]
    Rejected(String),

    /// Transport-level or malformed-response failure
    #[error("identity service failure: {0}")]
    Unexpected(String),
}

impl SignInError {
    /// Classify a gRPC status from the identity service
    pub fn from_status(status: &tonic::Status) -> Self {
        if status.code() == tonic::Code::Unauthenticated
            || status.message().contains(INVALID_CREDENTIALS_MARKER)
        {
            return Self::InvalidCredentials;
        }
        Self::Rejected(status.message().to_string())
    }

    /// Text shown on the sign-in screen for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::Rejected(message) => message.clone(),
            Self::Unexpected(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    }

    /// True for failures that are logged rather than surfaced verbatim
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected(_))
    }
}
