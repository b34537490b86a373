//! Fixed-template event formatting for stderr diagnostics.
//!
//! The daemon on the other end matches lines against `playurl[<LEVEL>]: ...`,
//! so every event renders through one template, whichever part of the program
//! (or the extractor bridge) emitted it.

use std::fmt;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Renders `playurl[<LEVEL>]: <message>`, one event per line.
pub struct TagFormat;

impl<S, N> FormatEvent<S, N> for TagFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "playurl[{}]: ", level_name(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Python's logging module spells this one out in full.
fn level_name(level: &Level) -> &'static str {
    if *level == Level::WARN {
        "WARNING"
    } else {
        level.as_str()
    }
}

/// Install the process-wide subscriber.
///
/// The returned guard must stay alive until exit so buffered lines reach
/// stderr.
pub fn init(level: LevelFilter) -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_ansi(false)
        .event_format(TagFormat)
        .with_writer(non_blocking)
        .with_max_level(level)
        .init();

    guard
}
