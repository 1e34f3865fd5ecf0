//! Build-time configuration for the API endpoint and log level with an
//! optional runtime override. The runtime config is read from
//! `window.VERIMAIL_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

use std::sync::OnceLock;
use tracing::Level;

/// API base used when neither the build nor the page provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Option<Level>,
}

impl AppConfig {
    /// Returns the configuration resolved on first use for the rest of the page's life.
    pub fn get() -> &'static Self {
        CONFIG.get_or_init(Self::load)
    }

    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("VERIMAIL_API_BASE_URL"),
            option_env!("VERIMAIL_LOG_LEVEL"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            log_level: log_level.and_then(parse_log_level),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_log_level) {
        config.log_level = Some(level);
    }
}

/// Accepts `error|warn|info|debug|trace` (any case) or `0..=4` in the same order.
pub fn parse_log_level(value: &str) -> Option<Level> {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<u8>() {
        return match parsed {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("VERIMAIL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
