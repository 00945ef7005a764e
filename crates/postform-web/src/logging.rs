#![forbid(unsafe_code)]

//! Console logging and panic reporting.
//!
//! A `tracing-subscriber` fmt layer formats each event into one line and
//! hands it to the matching `console.*` method. No timestamps: `std::time`
//! is unavailable on `wasm32-unknown-unknown`.

use std::io;
use std::sync::Once;

use postform_core::LogLevel;
use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata, debug};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, fmt, registry};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers one formatted event and flushes it to the console on drop.
pub(crate) struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let line = JsValue::from_str(line);
        match self.level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

const fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Install the console subscriber. Only the first call takes effect; later
/// installs keep the level chosen first.
pub(crate) fn init(level: LogLevel) {
    let layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleMakeWriter)
        .with_filter(level_filter(level));
    let subscriber = registry().with(layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!(target: "postform::web", "console subscriber already installed");
    }
}

/// Route Rust panics to `console.error`.
pub(crate) fn install_panic_hook() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            console::error_1(&JsValue::from_str(&format!("{info}")));
        }));
    });
}
