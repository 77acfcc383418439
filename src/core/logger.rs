//! Logger capability traits

use super::{error::Result, log_level::Level};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static FATAL_EXITS: AtomicBool = AtomicBool::new(true);

/// Whether a `fatal` call terminates the process after logging.
pub fn fatal_exits() -> bool {
    FATAL_EXITS.load(Ordering::Relaxed)
}

/// Enables or disables process exit on `fatal`. Enabled by default.
///
/// Tests turn this off to observe what happens after a fatal line. The toggle
/// is process-wide and meant to be set before concurrent logging begins.
pub fn set_fatal_exits(exits: bool) {
    FATAL_EXITS.store(exits, Ordering::Relaxed);
}

/// Exits with status 1 when [`fatal_exits`] is on.
pub(crate) fn exit_if_fatal() {
    if fatal_exits() {
        tracing::debug!("fatal log entry written, exiting process");
        std::process::exit(1);
    }
}

/// The severity-keyed call surface every logger exposes.
///
/// Messages are passed as [`fmt::Arguments`], usually built with
/// `format_args!` or the crate macros, so nothing is rendered for filtered
/// levels. Write failures are swallowed here after the attempt; use
/// [`LogWriter::log`] to observe them.
///
/// All call methods carry `#[track_caller]`, which is how source
/// attribution follows the call through delegating loggers.
pub trait Log: Send + Sync {
    /// Change the severity threshold. Sentinel levels are ignored.
    fn set_level(&self, level: Level);

    /// Replace the line prefix. The text is copied.
    fn set_prefix(&self, prefix: &str);

    /// Change the level used by [`Log::print`]. Sentinel levels are ignored.
    fn set_print_level(&self, level: Level);

    #[track_caller]
    fn trace(&self, args: fmt::Arguments<'_>);

    #[track_caller]
    fn debug(&self, args: fmt::Arguments<'_>);

    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>);

    #[track_caller]
    fn warning(&self, args: fmt::Arguments<'_>);

    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>);

    /// Log at `Fatal`, then exit with status 1 unless [`set_fatal_exits`]
    /// turned that off.
    #[track_caller]
    fn fatal(&self, args: fmt::Arguments<'_>);

    /// Log at `Panic`, then panic with the formatted message. Always unwinds.
    #[track_caller]
    fn panic(&self, args: fmt::Arguments<'_>) -> !;

    /// Log at the configured print-level.
    #[track_caller]
    fn print(&self, args: fmt::Arguments<'_>);
}

/// Direct sink entry point.
///
/// `depth` counts the delegation frames between the original call and this
/// one; dispatchers add one for each frame of their own. Implementations
/// must only write. Exiting on `Fatal` or unwinding on `Panic` is left to
/// the [`Log`] methods.
pub trait LogWriter: Log {
    /// Writes one line at `level`. `Level::Print` means the print-level.
    #[track_caller]
    fn log(&self, level: Level, depth: usize, args: fmt::Arguments<'_>) -> Result<()>;
}
