//! In-memory log capture for tests

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::Level;
use tracing::subscriber::DefaultGuard;

/// Collects formatted log lines from a thread-local subscriber
#[derive(Clone, Default)]
pub(crate) struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Capture every event on the current thread until the guard drops
    ///
    /// Tokio's current-thread test runtime polls spawned tasks on this same
    /// thread, so their events are captured too.
    pub(crate) fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let buffer = Arc::clone(&capture.buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(Arc::clone(&buffer)))
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Number of captured lines containing `needle`
    pub(crate) fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}
