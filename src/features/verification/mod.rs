//! Email verification feature: requesting a link and confirming a token.
//!
//! Both pages run the same attempt lifecycle (see [`submission`]): local
//! validation, one POST, then a success or failure that the page renders. State
//! is written through a [`StateCell`] so a response that lands after the page is
//! gone is dropped instead of touching discarded state.
//!
//! Flow Overview: `/send` validates the email and posts it; any 2xx shows a
//! neutral message that does not reveal whether the address exists. `/verify`
//! reads `token` from its own URL, posts it on load, and on success returns home
//! after a short delay. Only transport failures offer a retry.
//!
//! Emails and tokens are user data and must never be logged.

pub mod client;
pub mod email;
pub mod redirect;
pub mod send;
pub mod state;
pub mod submission;
pub mod token;
pub mod types;
pub mod verify;

#[cfg(target_arch = "wasm32")]
pub mod reactive;
#[cfg(test)]
mod testing;

pub use client::{HttpVerificationApi, VerificationApi};
pub use redirect::{HOME_PATH, Navigator, REDIRECT_DELAY_MS, Scheduler};
pub use send::SendRequestController;
pub use state::{LocalState, Phase, RequestState, StateCell};
pub use submission::{Attempt, Flow};
pub use verify::VerifyTokenController;
