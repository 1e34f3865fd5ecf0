//! Controller behind `/send`: validate an email and ask the API to mail a link.

use super::{
    client::{SEND_PATH, VerificationApi},
    email::valid_email,
    state::{RequestState, StateCell},
    submission::{Attempt, Flow, run_attempt},
    types::SendVerificationRequest,
};
use crate::app_lib::ApiResponse;
use std::cell::RefCell;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
/// Shown for every 2xx so the page never reveals whether an address is registered.
pub const SEND_SUCCESS_MESSAGE: &str = "If the email exists, a verification link was sent.";
pub const SEND_FAILURE_FALLBACK: &str = "An error occurred.";

pub struct SendFlow;

impl Flow for SendFlow {
    type Input = str;
    type Request = SendVerificationRequest;

    const ENDPOINT: &'static str = SEND_PATH;
    const REJECTION_FALLBACK: &'static str = SEND_FAILURE_FALLBACK;

    fn prepare(&self, email: &str) -> Result<SendVerificationRequest, String> {
        if valid_email(email) {
            Ok(SendVerificationRequest {
                email: email.to_string(),
            })
        } else {
            Err(INVALID_EMAIL_MESSAGE.to_string())
        }
    }

    fn success_message(&self, _response: &ApiResponse) -> String {
        SEND_SUCCESS_MESSAGE.to_string()
    }
}

pub struct SendRequestController<A, C> {
    api: A,
    state: C,
    last_email: RefCell<Option<String>>,
}

impl<A, C> SendRequestController<A, C>
where
    A: VerificationApi,
    C: StateCell,
{
    pub fn new(api: A, state: C) -> Self {
        Self {
            api,
            state,
            last_email: RefCell::new(None),
        }
    }

    /// Records what the user typed without starting an attempt.
    pub fn set_input(&self, value: String) {
        self.state.update(|state| state.input_value = value);
    }

    /// Validates `email` and, if it passes, sends exactly one request.
    pub async fn submit(&self, email: &str) -> Attempt {
        let accepted = self.state.update(|state| {
            if state.is_pending() {
                return false;
            }
            state.input_value = email.to_string();
            true
        });
        if accepted != Some(true) {
            return if accepted.is_none() {
                Attempt::Detached
            } else {
                Attempt::Ignored
            };
        }

        *self.last_email.borrow_mut() = Some(email.to_string());
        run_attempt(&SendFlow, &self.api, &self.state, email).await
    }

    /// Re-sends the last submitted email; only offered after a transport failure.
    pub async fn retry(&self) -> Attempt {
        let can_retry = self
            .state
            .snapshot()
            .is_some_and(|state| state.can_retry());
        let Some(email) = self.last_email.borrow().clone().filter(|_| can_retry) else {
            return Attempt::Ignored;
        };
        run_attempt(&SendFlow, &self.api, &self.state, &email).await
    }

    pub fn state(&self) -> Option<RequestState> {
        self.state.snapshot()
    }

    /// Detaches the controller from its page; responses still in flight are dropped.
    pub fn teardown(&self) {
        self.state.release();
    }
}
