//! Error taxonomy for the generate client.
//!
//! Every failure is terminal for the submission that caused it; nothing is
//! retried. The variants map one-to-one onto the user-visible messages the
//! form renders, see `FormConfig::message_for`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Rejected before any network activity (empty URL input).
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-success status. Carries the payload's
    /// `error` field when the service supplied one.
    #[error("server error{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Server { message: Option<String> },

    /// The request never produced a usable response: connect failure,
    /// timeout, or an unreadable/unparsable body.
    #[error("transport error: {0}")]
    Transport(String),
}
