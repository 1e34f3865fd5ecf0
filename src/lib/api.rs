//! HTTP helpers for the verification API with a consistent timeout and error
//! mapping. The helpers never inspect or log request bodies; they hand the raw
//! status and body back so each flow decides what a response means.

use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use super::errors::AppError;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct DetailBody {
    detail: Option<String>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `detail` field of a JSON body. Missing, blank, non-string, or
    /// non-JSON bodies all count as absent.
    pub fn detail(&self) -> Option<String> {
        serde_json::from_str::<DetailBody>(&self.body)
            .ok()
            .and_then(|body| body.detail)
            .filter(|detail| !detail.trim().is_empty())
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Posts a JSON body and returns whatever the server answered, success or not.
/// Only failures to obtain a response are errors.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: serde::Serialize>(
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<ApiResponse, AppError> {
    let url = build_url_with_base(base_url, path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(ApiResponse { status, body })
}

/// Maps network errors into `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}
