//! Controller behind `/verify`: confirm the token from the page URL and, once
//! confirmed, return home after [`REDIRECT_DELAY_MS`].

use super::{
    client::{VERIFY_PATH, VerificationApi},
    redirect::{HOME_PATH, Navigator, REDIRECT_DELAY_MS, Scheduler},
    state::{Phase, RequestState, StateCell},
    submission::{Attempt, Flow, run_attempt},
    token::token_from_url,
    types::VerifyTokenRequest,
};
use crate::app_lib::ApiResponse;
use std::cell::{Cell, RefCell};
use tracing::debug;

pub const MISSING_TOKEN_MESSAGE: &str = "No token provided.";
pub const VERIFY_FAILURE_FALLBACK: &str = "Verification failed.";

pub struct VerifyFlow;

impl Flow for VerifyFlow {
    /// The full page location; the token is re-read from it on every attempt.
    type Input = str;
    type Request = VerifyTokenRequest;

    const ENDPOINT: &'static str = VERIFY_PATH;
    const REJECTION_FALLBACK: &'static str = VERIFY_FAILURE_FALLBACK;

    fn prepare(&self, location: &str) -> Result<VerifyTokenRequest, String> {
        token_from_url(location)
            .map(|token| VerifyTokenRequest { token })
            .ok_or_else(|| MISSING_TOKEN_MESSAGE.to_string())
    }

    /// The server's own wording is shown as-is.
    fn success_message(&self, response: &ApiResponse) -> String {
        response.detail().unwrap_or_default()
    }
}

pub struct VerifyTokenController<A, C, S, N>
where
    S: Scheduler,
{
    api: A,
    state: C,
    location: String,
    scheduler: S,
    navigator: N,
    redirect: RefCell<Option<S::Handle>>,
    torn_down: Cell<bool>,
}

impl<A, C, S, N> VerifyTokenController<A, C, S, N>
where
    A: VerificationApi,
    C: StateCell,
    S: Scheduler,
    N: Navigator + Clone + 'static,
{
    pub fn new(api: A, state: C, location: impl Into<String>, scheduler: S, navigator: N) -> Self {
        Self {
            api,
            state,
            location: location.into(),
            scheduler,
            navigator,
            redirect: RefCell::new(None),
            torn_down: Cell::new(false),
        }
    }

    /// Confirms the token. Pages call this once on mount; it is refused while a
    /// request is already in flight.
    pub async fn verify(&self) -> Attempt {
        if self.torn_down.get() {
            return Attempt::Detached;
        }
        if self.state.snapshot().is_some_and(|state| state.is_pending()) {
            return Attempt::Ignored;
        }
        *self.redirect.borrow_mut() = None;

        let attempt = run_attempt(&VerifyFlow, &self.api, &self.state, &self.location).await;
        if attempt == Attempt::Completed(Phase::Succeeded) && !self.torn_down.get() {
            self.schedule_redirect();
        }
        attempt
    }

    /// Runs [`Self::verify`] again; only offered after a transport failure.
    pub async fn retry(&self) -> Attempt {
        if !self.state.snapshot().is_some_and(|state| state.can_retry()) {
            return Attempt::Ignored;
        }
        self.verify().await
    }

    pub fn state(&self) -> Option<RequestState> {
        self.state.snapshot()
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect.borrow().is_some()
    }

    /// Cancels the pending redirect and drops any response still in flight.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        if self.redirect.take().is_some() {
            debug!("cancelled pending redirect");
        }
        self.state.release();
    }

    fn schedule_redirect(&self) {
        let navigator = self.navigator.clone();
        let handle = self.scheduler.schedule(
            REDIRECT_DELAY_MS,
            Box::new(move || {
                debug!(path = HOME_PATH, "redirecting after verification");
                navigator.navigate(HOME_PATH);
            }),
        );
        *self.redirect.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::{MISSING_TOKEN_MESSAGE, VERIFY_FAILURE_FALLBACK, VerifyTokenController};
    use crate::app_lib::{ApiResponse, AppError, errors::NETWORK_ERROR_MESSAGE};
    use crate::features::verification::{
        client::VERIFY_PATH,
        redirect::{HOME_PATH, REDIRECT_DELAY_MS},
        state::{LocalState, Phase},
        submission::Attempt,
        testing::{FakeApi, ManualScheduler, Reply, recording_navigator},
    };
    use anyhow::{Context, Result};
    use serde_json::json;

    const VERIFIED: &str = r#"{"ok":true,"detail":"Email verified."}"#;

    #[tokio::test]
    async fn missing_token_fails_without_network() -> Result<()> {
        for location in ["/verify", "/verify?token=", "https://app.example/verify?lang=en"] {
            let api = FakeApi::new();
            let clock = ManualScheduler::new();
            let (navigate, visited) = recording_navigator();
            let controller =
                VerifyTokenController::new(api.clone(), LocalState::new(), location, clock, navigate);

            assert_eq!(controller.verify().await, Attempt::Rejected);

            let state = controller.state().context("state released")?;
            assert_eq!(state.phase, Phase::Failed);
            assert_eq!(state.error_message.as_deref(), Some(MISSING_TOKEN_MESSAGE));
            assert!(!state.is_network_error);
            assert!(!state.can_retry());
            assert!(api.calls().is_empty());
            assert!(visited.borrow().is_empty());
        }
        Ok(())
    }

    #[tokio::test]
    async fn success_shows_detail_and_redirects_after_delay() -> Result<()> {
        let api = FakeApi::with_replies([Reply::status(200, VERIFIED)]);
        let clock = ManualScheduler::new();
        let (navigate, visited) = recording_navigator();
        let controller = VerifyTokenController::new(
            api.clone(),
            LocalState::new(),
            "/verify?token=abc123",
            clock.clone(),
            navigate,
        );

        assert_eq!(controller.verify().await, Attempt::Completed(Phase::Succeeded));
        assert_eq!(
            api.calls(),
            vec![(VERIFY_PATH.to_string(), json!({ "token": "abc123" }))]
        );
        let state = controller.state().context("state released")?;
        assert_eq!(state.result_message.as_deref(), Some("Email verified."));
        assert!(controller.redirect_pending());

        clock.advance(u64::from(REDIRECT_DELAY_MS) - 1);
        assert!(visited.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*visited.borrow(), vec![HOME_PATH.to_string()]);
        assert_eq!(clock.armed(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn success_without_detail_still_redirects() -> Result<()> {
        for body in ["", "{}", r#"{"detail":"  "}"#] {
            let api = FakeApi::with_replies([Reply::status(200, body)]);
            let clock = ManualScheduler::new();
            let (navigate, visited) = recording_navigator();
            let controller = VerifyTokenController::new(
                api,
                LocalState::new(),
                "/verify?token=abc123",
                clock.clone(),
                navigate,
            );

            assert_eq!(controller.verify().await, Attempt::Completed(Phase::Succeeded));

            let state = controller.state().context("state released")?;
            assert_eq!(state.result_message.as_deref(), Some(""));
            assert_eq!(state.error_message, None);
            assert!(controller.redirect_pending());

            clock.advance(u64::from(REDIRECT_DELAY_MS));
            assert_eq!(*visited.borrow(), vec![HOME_PATH.to_string()]);
        }
        Ok(())
    }

    #[tokio::test]
    async fn teardown_before_delay_cancels_redirect() {
        let api = FakeApi::with_replies([Reply::status(200, VERIFIED)]);
        let clock = ManualScheduler::new();
        let (navigate, visited) = recording_navigator();
        let controller = VerifyTokenController::new(
            api,
            LocalState::new(),
            "/verify?token=abc123",
            clock.clone(),
            navigate,
        );

        controller.verify().await;
        clock.advance(1_000);
        controller.teardown();
        clock.advance(10_000);

        assert!(visited.borrow().is_empty());
        assert!(!controller.redirect_pending());
        assert_eq!(clock.armed(), 0);
    }

    #[tokio::test]
    async fn response_after_teardown_schedules_nothing() {
        let (reply, release) = Reply::gated();
        let api = FakeApi::with_replies([reply]);
        let clock = ManualScheduler::new();
        let (navigate, visited) = recording_navigator();
        let controller = VerifyTokenController::new(
            api,
            LocalState::new(),
            "/verify?token=abc123",
            clock.clone(),
            navigate,
        );

        let (attempt, ()) = tokio::join!(controller.verify(), async {
            controller.teardown();
            let _ = release.send(ApiResponse::new(200, VERIFIED));
        });

        assert_eq!(attempt, Attempt::Detached);
        assert_eq!(controller.state(), None);
        clock.advance(u64::from(REDIRECT_DELAY_MS));
        assert!(visited.borrow().is_empty());
        assert_eq!(clock.armed(), 0);
    }

    #[tokio::test]
    async fn rejection_uses_server_detail() -> Result<()> {
        let api = FakeApi::with_replies([Reply::status(400, r#"{"detail":"Token expired."}"#)]);
        let controller = VerifyTokenController::new(
            api,
            LocalState::new(),
            "/verify?token=abc",
            ManualScheduler::new(),
            recording_navigator().0,
        );

        assert_eq!(controller.verify().await, Attempt::Completed(Phase::Failed));

        let state = controller.state().context("state released")?;
        assert_eq!(state.error_message.as_deref(), Some("Token expired."));
        assert!(!state.is_network_error);
        assert!(!controller.redirect_pending());
        assert_eq!(controller.retry().await, Attempt::Ignored);
        Ok(())
    }

    #[tokio::test]
    async fn rejection_without_detail_uses_fallback() -> Result<()> {
        let api = FakeApi::with_replies([Reply::status(500, "Internal Server Error")]);
        let controller = VerifyTokenController::new(
            api,
            LocalState::new(),
            "/verify?token=abc",
            ManualScheduler::new(),
            recording_navigator().0,
        );

        controller.verify().await;

        let state = controller.state().context("state released")?;
        assert_eq!(state.error_message.as_deref(), Some(VERIFY_FAILURE_FALLBACK));
        Ok(())
    }

    #[tokio::test]
    async fn network_failure_then_retry_succeeds() -> Result<()> {
        let api = FakeApi::with_replies([Reply::Fail(AppError::Timeout(
            "Request timed out. Please try again.".to_string(),
        ))]);
        let clock = ManualScheduler::new();
        let (navigate, visited) = recording_navigator();
        let controller = VerifyTokenController::new(
            api.clone(),
            LocalState::new(),
            "/verify?token=abc",
            clock.clone(),
            navigate,
        );

        controller.verify().await;
        let state = controller.state().context("state released")?;
        assert_eq!(state.error_message.as_deref(), Some(NETWORK_ERROR_MESSAGE));
        assert!(state.is_network_error);
        assert!(state.can_retry());

        api.push(Reply::status(200, r#"{"detail":"Email verified."}"#));
        assert_eq!(controller.retry().await, Attempt::Completed(Phase::Succeeded));

        let state = controller.state().context("state released")?;
        assert_eq!(state.result_message.as_deref(), Some("Email verified."));
        assert_eq!(state.error_message, None);
        assert!(!state.is_network_error);
        assert_eq!(api.calls().len(), 2);

        clock.advance(u64::from(REDIRECT_DELAY_MS));
        assert_eq!(*visited.borrow(), vec![HOME_PATH.to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn verify_is_refused_while_pending() {
        let (reply, release) = Reply::gated();
        let api = FakeApi::with_replies([reply]);
        let controller = VerifyTokenController::new(
            api.clone(),
            LocalState::new(),
            "/verify?token=abc",
            ManualScheduler::new(),
            recording_navigator().0,
        );

        let (first, second) = tokio::join!(controller.verify(), async {
            let second = controller.verify().await;
            let _ = release.send(ApiResponse::new(200, VERIFIED));
            second
        });

        assert_eq!(first, Attempt::Completed(Phase::Succeeded));
        assert_eq!(second, Attempt::Ignored);
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn verify_after_teardown_is_detached() {
        let api = FakeApi::new();
        let controller = VerifyTokenController::new(
            api.clone(),
            LocalState::new(),
            "/verify?token=abc",
            ManualScheduler::new(),
            recording_navigator().0,
        );

        controller.teardown();

        assert_eq!(controller.verify().await, Attempt::Detached);
        assert!(api.calls().is_empty());
    }
}
