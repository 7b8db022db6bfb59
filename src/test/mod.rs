
use std::io;
use std::sync::{Arc, Mutex, Once};

use tracing::{debug, Level};
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs a global subscriber once per test binary so `tracing` events from the code under
/// test show up with `--nocapture`. `RUST_LOG` overrides the default `debug` filter.
pub(crate) fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else {
            subscriber.try_init().unwrap_or_else(|e| {
                eprintln!("Error: Failed to set up logging: {}", e);
            });
        }
    });
}

/// Runs `f` under a subscriber that records every event as plain text, returning `f`'s result
/// along with what was recorded. The subscriber only applies to the current thread.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// In-memory sink shared between the subscriber and the test reading it.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
        init_test_setup();
    }

    #[test]
    fn capture_logs_records_only_inside() {
        debug!("Before capturing");
        let (value, logs) = capture_logs(|| {
            debug!("While capturing");
            7
        });

        assert_eq!(value, 7);
        assert!(logs.contains("While capturing"));
        assert!(!logs.contains("Before capturing"));
    }
}
