// Diagnostics formatting for hosts that surface exporter logs on a console

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Single-line formatter: `LEVEL [HH:MM:SS] message`
pub struct ReportFormatter;

impl<S, N> FormatEvent<S, N> for ReportFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();
        let timestamp = Local::now().format("%H:%M:%S");

        write!(writer, "{level:>5} [{timestamp}]: ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install a subscriber that prints exporter diagnostics. Hosts with their
/// own tracing setup should skip this and rely on their subscriber instead.
pub fn init(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        "reportify=debug,warn"
    } else {
        "reportify=warn,error"
    };

    tracing_subscriber::fmt()
        .event_format(ReportFormatter)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}
