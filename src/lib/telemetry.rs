//! Installs the `tracing` subscriber. Browsers have no stdout, so on `wasm32`
//! each formatted line is forwarded to the devtools console at the level of the
//! event that produced it. Timestamps are omitted because `SystemTime` is not
//! available in the browser and the console stamps lines itself.

use super::errors::AppError;
use tracing::Level;

/// Installs a global fmt subscriber capped at `level`; `None` leaves logging off.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(level: Option<Level>) -> Result<(), AppError> {
    let Some(level) = level else {
        return Ok(());
    };

    tracing::subscriber::set_global_default(subscriber(level))
        .map_err(|err| AppError::Config(format!("Failed to initialize logging: {err}")))
}

fn subscriber(level: Level) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer())
        .finish()
}

#[cfg(not(target_arch = "wasm32"))]
fn writer() -> fn() -> std::io::Stderr {
    std::io::stderr
}

#[cfg(target_arch = "wasm32")]
fn writer() -> console::MakeConsoleWriter {
    console::MakeConsoleWriter
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    pub struct MakeConsoleWriter;

    /// Buffers one formatted event and emits it on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let value = wasm_bindgen::JsValue::from_str(line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                _ => web_sys::console::log_1(&value),
            }
        }
    }
}
