//! Leptos glue: page state lives in a signal so the view re-renders on every
//! transition. A disposed signal refuses writes, which is exactly the
//! "torn-down page" behavior `StateCell` asks for.

use super::state::{RequestState, StateCell};
use leptos::prelude::*;

impl StateCell for RwSignal<RequestState> {
    fn update<R>(&self, apply: impl FnOnce(&mut RequestState) -> R) -> Option<R> {
        self.try_update(apply)
    }

    fn snapshot(&self) -> Option<RequestState> {
        self.try_get_untracked()
    }
}

/// Full URL of the current page, or an empty string outside a browser window.
pub fn current_location() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}
