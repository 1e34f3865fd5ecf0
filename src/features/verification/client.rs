//! Client seam for the verification API. Controllers depend on the
//! `VerificationApi` trait; the browser build talks HTTP through
//! `HttpVerificationApi`.

use crate::app_lib::{ApiResponse, AppError, config::AppConfig};
use serde::Serialize;
use std::future::Future;

/// Path of the "send me a link" endpoint, relative to the API base.
pub const SEND_PATH: &str = "/verification/send/";
/// Path of the token confirmation endpoint, relative to the API base.
pub const VERIFY_PATH: &str = "/verification/verify/";

pub trait VerificationApi {
    /// POSTs `body` as JSON to `path`. Any HTTP answer is `Ok`; `Err` means no
    /// response was obtained.
    fn post_json<B: Serialize>(
        &self,
        path: &'static str,
        body: &B,
    ) -> impl Future<Output = Result<ApiResponse, AppError>>;
}

/// HTTP implementation against the configured API base.
#[derive(Clone, Debug)]
pub struct HttpVerificationApi {
    base_url: String,
}

impl HttpVerificationApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(AppConfig::get().api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(target_arch = "wasm32")]
impl VerificationApi for HttpVerificationApi {
    async fn post_json<B: Serialize>(
        &self,
        path: &'static str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        crate::app_lib::api::post_json(&self.base_url, path, body).await
    }
}
