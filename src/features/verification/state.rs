//! Per-page request state and the cell it lives in.
//!
//! `RequestState` is a plain record with transition methods; every write goes
//! through a [`StateCell`], which refuses writes once the owning page has been
//! torn down.

use crate::app_lib::SubmissionError;
use std::{cell::RefCell, rc::Rc};

/// Discrete state of one submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestState {
    /// Raw text of the email field (send page only).
    pub input_value: String,
    pub phase: Phase,
    pub result_message: Option<String>,
    pub error_message: Option<String>,
    /// Set only when the last failure never produced a response.
    pub is_network_error: bool,
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    pub fn can_retry(&self) -> bool {
        self.phase == Phase::Failed && self.is_network_error
    }

    /// Phases in which the verify page shows its progress indicator.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Validating | Phase::Pending)
    }

    pub(crate) fn begin_attempt(&mut self) {
        self.phase = Phase::Validating;
        self.result_message = None;
        self.error_message = None;
        self.is_network_error = false;
    }

    pub(crate) fn mark_pending(&mut self) {
        self.phase = Phase::Pending;
    }

    pub(crate) fn succeed(&mut self, message: String) {
        self.phase = Phase::Succeeded;
        self.result_message = Some(message);
        self.error_message = None;
        self.is_network_error = false;
    }

    pub(crate) fn fail(&mut self, error: &SubmissionError) {
        self.phase = Phase::Failed;
        self.result_message = None;
        self.error_message = Some(error.user_message());
        if !matches!(error, SubmissionError::Validation(_)) {
            self.is_network_error = error.is_retryable();
        }
    }

    /// Applies the result of an attempt and returns the phase it landed in.
    pub(crate) fn resolve(&mut self, outcome: &Result<String, SubmissionError>) -> Phase {
        match outcome {
            Ok(message) => self.succeed(message.clone()),
            Err(error) => self.fail(error),
        }
        self.phase
    }
}

/// Shared home of a page's `RequestState`.
pub trait StateCell {
    /// Runs `apply` against the live state; `None` once the owner is gone.
    fn update<R>(&self, apply: impl FnOnce(&mut RequestState) -> R) -> Option<R>;

    /// Copy of the current state; `None` once the owner is gone.
    fn snapshot(&self) -> Option<RequestState>;

    /// Drops the state so later writes become no-ops.
    fn release(&self) {}
}

/// `StateCell` backed by a plain `Rc<RefCell<_>>`, for non-reactive owners and tests.
#[derive(Clone, Debug)]
pub struct LocalState(Rc<RefCell<Option<RequestState>>>);

impl LocalState {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Some(RequestState::default()))))
    }
}

impl Default for LocalState {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCell for LocalState {
    fn update<R>(&self, apply: impl FnOnce(&mut RequestState) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(apply)
    }

    fn snapshot(&self) -> Option<RequestState> {
        self.0.borrow().clone()
    }

    fn release(&self) {
        self.0.borrow_mut().take();
    }
}
