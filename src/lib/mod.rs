//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Verification flow
//!
//! 1. **Request:** The user submits an email on `/send`; the client POSTs it to
//!    `/verification/send/` and always shows the same neutral confirmation so
//!    the page never reveals whether an address is registered.
//! 2. **Confirm:** The emailed link opens `/verify?token=...`; the client POSTs
//!    the token to `/verification/verify/` on load and shows the server detail.
//! 3. **Leave:** After a successful confirmation the page returns home on its
//!    own after a short delay.
//!
//! Centralizing these helpers keeps network behavior consistent between the two
//! pages. Email addresses and tokens pass through here, so callers must never
//! log request bodies.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod telemetry;

pub use api::{ApiResponse, build_url_with_base};
pub use errors::{AppError, SubmissionError};
