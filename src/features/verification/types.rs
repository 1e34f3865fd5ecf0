//! Request bodies for the verification API. They carry an email address or a
//! verification token, so they must never be logged.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendVerificationRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}
