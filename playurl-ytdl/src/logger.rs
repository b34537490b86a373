//! Bridge from yt-dlp's logger protocol to `tracing`.

use pyo3::prelude::*;

const TARGET: &str = "ytdl";

/// Logger object handed to `YoutubeDL` as its `logger` parameter.
///
/// yt-dlp calls `debug`/`info`/`warning`/`error` on it instead of writing to
/// the console, so extractor-internal lines come out of the same subscriber as
/// the rest of the process, under the `"ytdl"` target.
#[pyclass]
pub struct YtdlLogger;

#[pymethods]
impl YtdlLogger {
    /// yt-dlp routes info-level lines here as well; true debug lines carry a
    /// `"[debug] "` prefix.
    pub fn debug(&self, msg: &str) {
        match msg.strip_prefix("[debug] ") {
            Some(rest) => tracing::debug!(target: TARGET, "{rest}"),
            None => tracing::info!(target: TARGET, "{msg}"),
        }
    }

    pub fn info(&self, msg: &str) {
        tracing::info!(target: TARGET, "{msg}");
    }

    pub fn warning(&self, msg: &str) {
        tracing::warn!(target: TARGET, "{msg}");
    }

    pub fn error(&self, msg: &str) {
        tracing::error!(target: TARGET, "{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Sink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Sink {
        type Writer = Sink;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let sink = Sink::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_max_level(LevelFilter::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        sink.contents()
    }

    #[test]
    fn splits_debug_prefix() {
        let out = capture(|| YtdlLogger.debug("[debug] Loading archive file"));

        assert!(out.contains("DEBUG"), "unexpected output: {out}");
        assert!(out.contains("Loading archive file"));
        assert!(!out.contains("[debug]"));
    }

    #[test]
    fn unprefixed_debug_is_info() {
        let out = capture(|| YtdlLogger.debug("Extracting URL: https://example.com/watch?v=abc"));

        assert!(out.contains("INFO"), "unexpected output: {out}");
        assert!(out.contains("Extracting URL"));
    }

    #[test]
    fn warning_and_error_keep_severity() {
        let out = capture(|| {
            YtdlLogger.warning("unable to read cookies");
            YtdlLogger.error("giving up after 3 retries");
        });

        assert!(out.contains("WARN"), "unexpected output: {out}");
        assert!(out.contains("ERROR"));
    }

    #[test]
    fn events_use_ytdl_target() {
        let out = capture(|| YtdlLogger.info("shared target"));

        assert!(out.contains(TARGET), "unexpected output: {out}");
    }
}
