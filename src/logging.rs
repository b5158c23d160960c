use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Stdout carries the raw response, so log lines never go there. The filter
/// comes from `RUST_LOG` and defaults to `warn`. Calling this more than once is
/// harmless; only the first subscriber is installed.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();

    tracing::debug!("rawget logging initialized");
}

/// Runs `f` under a subscriber that keeps `warn` and above, returning what was logged.
#[cfg(test)]
pub(crate) fn capture_warnings<F: FnOnce()>(f: F) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let logged = buf.0.lock().unwrap().clone();
    String::from_utf8(logged).unwrap()
}
