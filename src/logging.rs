//! Logging configuration and initialization
//!
//! Every component logs through `tracing`; output goes to stdout and to an
//! append-only `logs/running_logs.log`, both using the same line format.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "running_logs.log";

/// Renders `[<timestamp>: <LEVEL>: <target>: <message>]`.
struct RunningLogFormat;

impl<S, N> FormatEvent<S, N> for RunningLogFormat
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
        let meta = event.metadata();
        write!(
            writer,
            "[{}: {}: {}: ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            meta.level(),
            meta.target()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer, "]")
    }
}

/// Initialize tracing for the process, once, before any stage runs.
///
/// Verbosity maps 0 -> info, 1 -> debug, 2+ -> trace; `RUST_LOG` overrides
/// the mapping when set. The log directory is created before the file sink
/// is attached.
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fs::create_dir_all(LOG_DIR)
        .with_context(|| format!("failed to create log directory {LOG_DIR}"))?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(LOG_DIR).join(LOG_FILE))
        .context("failed to open running log file")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .event_format(RunningLogFormat)
                .with_writer(io::stdout),
        )
        .with(
            fmt::layer()
                .event_format(RunningLogFormat)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))?;

    debug!("logging initialized at level {}", log_level);
    Ok(())
}
