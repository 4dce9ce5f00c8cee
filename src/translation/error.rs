use thiserror::Error;

/// Errors surfaced to the user when a translation cannot be produced.
///
/// The messages are shown verbatim, so they are phrased for end users
/// rather than for debugging.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Input was empty or whitespace only. No request was sent.
    #[error("Enter some text to translate")]
    EmptyInput,

    /// The service answered with HTTP 429.
    #[error("Request limit reached. Try again in a few minutes.")]
    RateLimited,

    /// Transport failure, unexpected status, or an unreadable response.
    ///
    /// `detail` describes the underlying cause for diagnostics; it is not
    /// part of the displayed message.
    #[error("Translation failed. Check your connection and try again.")]
    Connection { detail: String },
}

impl TranslateError {
    pub(crate) fn connection(detail: impl std::fmt::Display) -> Self {
        Self::Connection {
            detail: detail.to_string(),
        }
    }

    /// Returns the underlying cause of a connectivity failure, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Connection { detail } => Some(detail),
            _ => None,
        }
    }

    /// Process exit code for this error (sysexits-style).
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::EmptyInput => exitcode::DATAERR,
            Self::RateLimited => exitcode::TEMPFAIL,
            Self::Connection { .. } => exitcode::UNAVAILABLE,
        }
    }
}
