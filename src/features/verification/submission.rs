//! One submission attempt, shared by both pages.
//!
//! A [`Flow`] describes what differs between the pages (input, body, endpoint,
//! how a response reads); [`run_attempt`] drives the common lifecycle:
//!
//! ```text
//! Idle/Failed/Succeeded --start--> Validating --invalid--> Failed
//!                                  Validating --valid----> Pending
//! Pending --2xx--> Succeeded | --non-2xx--> Failed | --no response--> Failed(network)
//! ```
//!
//! Only transport errors (see [`AppError::is_transport`]) are retryable; a
//! request that could not even be set up fails like a rejection.

use super::client::VerificationApi;
use super::state::{Phase, StateCell};
use crate::app_lib::{ApiResponse, AppError, SubmissionError};
use serde::Serialize;
use tracing::{debug, warn};

/// What became of a call to [`run_attempt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Refused without touching state: a request is in flight, or no retry is offered.
    Ignored,
    /// Input failed local checks; no request was sent.
    Rejected,
    /// The request finished and the state landed in this phase.
    Completed(Phase),
    /// The owning page was torn down; nothing was written.
    Detached,
}

pub trait Flow {
    /// What the page hands over (an email, a page URL).
    type Input: ?Sized;
    /// JSON body posted to [`Flow::ENDPOINT`].
    type Request: Serialize;

    const ENDPOINT: &'static str;
    /// Message for a non-2xx response without a usable `detail`.
    const REJECTION_FALLBACK: &'static str;

    /// Checks the input locally and builds the request body. `Err` carries the
    /// message shown to the user.
    fn prepare(&self, input: &Self::Input) -> Result<Self::Request, String>;

    /// Message shown for a 2xx response.
    fn success_message(&self, response: &ApiResponse) -> String;

    /// Classifies the result of the request.
    fn interpret(&self, result: Result<ApiResponse, AppError>) -> Result<String, SubmissionError> {
        match result {
            Ok(response) if response.is_success() => Ok(self.success_message(&response)),
            Ok(response) => Err(SubmissionError::ServerRejection {
                status: response.status,
                message: response
                    .detail()
                    .unwrap_or_else(|| Self::REJECTION_FALLBACK.to_string()),
            }),
            Err(err) if err.is_transport() => Err(SubmissionError::TransportFailure(err)),
            Err(err) => Err(SubmissionError::ClientFailure {
                message: Self::REJECTION_FALLBACK.to_string(),
                cause: err,
            }),
        }
    }
}

/// Runs one attempt of `flow` against `api`, writing every transition to `cell`.
pub async fn run_attempt<F, A, C>(flow: &F, api: &A, cell: &C, input: &F::Input) -> Attempt
where
    F: Flow,
    A: VerificationApi,
    C: StateCell,
{
    let started = cell.update(|state| {
        if state.is_pending() {
            return false;
        }
        state.begin_attempt();
        true
    });
    match started {
        None => return Attempt::Detached,
        Some(false) => {
            debug!(endpoint = F::ENDPOINT, "ignoring attempt while a request is in flight");
            return Attempt::Ignored;
        }
        Some(true) => {}
    }

    let request = match flow.prepare(input) {
        Ok(request) => request,
        Err(message) => {
            debug!(endpoint = F::ENDPOINT, "input rejected before sending");
            let error = SubmissionError::Validation(message);
            return match cell.update(|state| state.fail(&error)) {
                Some(()) => Attempt::Rejected,
                None => Attempt::Detached,
            };
        }
    };

    if cell.update(|state| state.mark_pending()).is_none() {
        return Attempt::Detached;
    }

    debug!(endpoint = F::ENDPOINT, "sending request");
    let outcome = flow.interpret(api.post_json(F::ENDPOINT, &request).await);
    match &outcome {
        Err(SubmissionError::TransportFailure(err)) => {
            warn!(endpoint = F::ENDPOINT, error = %err, "request failed without a response");
        }
        Err(SubmissionError::ClientFailure { cause, .. }) => {
            warn!(endpoint = F::ENDPOINT, error = %cause, "request could not be sent");
        }
        Err(SubmissionError::ServerRejection { status, .. }) => {
            debug!(endpoint = F::ENDPOINT, status, "request rejected");
        }
        _ => {}
    }

    match cell.update(|state| state.resolve(&outcome)) {
        Some(phase) => {
            debug!(endpoint = F::ENDPOINT, ?phase, "attempt finished");
            Attempt::Completed(phase)
        }
        None => {
            debug!(endpoint = F::ENDPOINT, "discarding response for a torn-down page");
            Attempt::Detached
        }
    }
}
