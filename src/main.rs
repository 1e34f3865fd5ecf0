#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
use verimail_web::{
    app::App,
    app_lib::{config::AppConfig, telemetry},
};

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::get();
    if let Err(err) = telemetry::init(config.log_level) {
        web_sys::console::error_1(&err.to_string().into());
    }

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
