//! Three-way outcome of a form submission: success, failure with a known HTTP status,
//! or failure for an unknown reason. Callers supply the user-facing failure message.

use std::borrow::Cow;
use std::future::Future;
use tracing::warn;

#[sprouts_derive::sprouts_error]
pub enum SubmissionError {
    /// The upstream API answered with a non-success status.
    #[error("Request failed with status {status}{}: {message}", format_context(.context))]
    Request { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Request failed{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SubmissionError {
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Internal { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failed { status: u16, message: Cow<'static, str> },
    Unknown { message: Cow<'static, str> },
}

impl SubmissionResult {
    pub fn failure(message: impl Into<Cow<'static, str>>, status: Option<u16>) -> Self {
        let message = message.into();
        match status {
            Some(status) => Self::Failed { status, message },
            None => Self::Unknown { message },
        }
    }

    /// Awaits `request` and folds its outcome into a result carrying `failure_message`.
    pub async fn resolve<F, T, E>(request: F, failure_message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Future<Output = Result<T, E>>,
        E: Into<SubmissionError>,
    {
        match request.await {
            Ok(_) => Self::Success,
            Err(err) => {
                let err = err.into();
                warn!(error = %err, status = ?err.status(), "Submission failed");
                Self::failure(failure_message, err.status())
            },
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Failed { status, .. } => Some(*status),
            Self::Success | Self::Unknown { .. } => None,
        }
    }

    /// The caller-supplied failure message, empty on success.
    pub fn error_message(&self) -> &str {
        match self {
            Self::Success => "",
            Self::Failed { message, .. } | Self::Unknown { message } => message,
        }
    }
}
