//! Delayed navigation after a successful verification.

/// Where the verify page sends the user once the token is confirmed.
pub const HOME_PATH: &str = "/";
/// Delay between showing the confirmation and leaving the page.
pub const REDIRECT_DELAY_MS: u32 = 2_500;

/// One-shot timers. Dropping the returned handle cancels the task if it has not
/// fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Client-side navigation to an in-app path.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Browser timers via `setTimeout`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for GlooScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}
