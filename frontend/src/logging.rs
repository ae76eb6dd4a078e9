use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Routes `tracing` output to the browser console.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    // No timestamps, the wasm target has no system clock
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_writer(ConsoleWriter),
        )
        .init();
}

struct ConsoleWriter;

/// Buffers one formatted event and hands it to the console when dropped.
struct ConsoleLine {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer).trim_end().to_owned();
        if line.is_empty() {
            return;
        }

        match self.level {
            Level::ERROR => gloo_console::error!(line),
            Level::WARN => gloo_console::warn!(line),
            Level::INFO => gloo_console::info!(line),
            _ => gloo_console::debug!(line),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}
