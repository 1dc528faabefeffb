//! Diagnostic output on stderr, gated by the `debug` environment variable.
//!
//! Events are written as `<LEVEL>: <message>` with no timestamp, target or
//! colour, so `tracing::debug!("spec")` prints exactly `DEBUG: spec`.

use std::fmt;

use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable that switches diagnostics on when set to any value.
pub const DEBUG_ENV: &str = "debug";

/// Event formatter producing `<LEVEL>: <fields>` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPrefix;

impl<S, N> FormatEvent<S, N> for LevelPrefix
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
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Maximum level for a given value of the `debug` variable.
///
/// Any set value, including an empty one, enables debug output.
#[must_use]
pub fn level_for(debug: Option<&str>) -> LevelFilter {
    if debug.is_some() {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    }
}

/// Builds a subscriber writing formatted events to `writer`.
pub fn subscriber<W>(debug: Option<&str>, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level_for(debug))
        .with_writer(writer)
        .event_format(LevelPrefix)
        .finish()
}

/// Installs the stderr subscriber for the process.
///
/// Reads [`DEBUG_ENV`] once; later changes to the variable are ignored.
/// Calling this more than once is harmless.
pub fn init() {
    let debug = std::env::var_os(DEBUG_ENV).map(|v| v.to_string_lossy().into_owned());
    let _ = tracing::subscriber::set_global_default(subscriber(debug.as_deref(), std::io::stderr));
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Capture {
        type Writer = Capture;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn prints_prefixed_debug_line_when_enabled() {
        let capture = Capture::default();
        let sub = subscriber(Some("true"), capture.clone());

        tracing::subscriber::with_default(sub, || tracing::debug!("spec"));

        assert_eq!(capture.contents(), "DEBUG: spec\n");
    }

    #[test]
    fn empty_value_still_enables_output() {
        assert_eq!(level_for(Some("")), LevelFilter::DEBUG);
    }

    #[test]
    fn suppresses_output_when_unset() {
        let capture = Capture::default();
        let sub = subscriber(None, capture.clone());

        tracing::subscriber::with_default(sub, || tracing::debug!("spec"));

        assert_eq!(capture.contents(), "");
    }
}
