//! Email verification web client.
//!
//! Two pages drive the verification API: `/send` requests a verification link
//! for an email address and `/verify` consumes the token from that link. The
//! request state machines live in [`features::verification`] and compile on
//! every target; the Leptos view layer is only built for `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;
