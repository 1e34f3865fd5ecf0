//! Error types for the HTTP helpers and for a single submission attempt.
//!
//! `AppError` describes why a request never produced a response. Once a
//! response exists, the outcome of an attempt is a `SubmissionError` (or a
//! success), which is what the pages render.

use thiserror::Error;

/// Fixed text shown for every transport failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// True when the request was sent but no response came back. These are
    /// the only failures worth retrying.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Timeout(_))
    }
}

/// Why one submission attempt failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// Input rejected locally; the network was never touched.
    #[error("{0}")]
    Validation(String),
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    ServerRejection { status: u16, message: String },
    /// No response was obtained.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    TransportFailure(AppError),
    /// The request could not be set up in this browser; retrying will not help.
    #[error("{message}")]
    ClientFailure { message: String, cause: AppError },
}

impl SubmissionError {
    /// Only transport failures offer a retry; a rejection is final for that input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::TransportFailure(_))
    }

    /// Message rendered to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
