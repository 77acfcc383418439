//! Writer-backed logger

use crate::core::{
    exit_if_fatal, Flags, Level, Line, Log, LogWriter, LoggerError, Options, Result,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

thread_local! {
    static SCRATCH: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(256));
}

/// Runs `f` on this thread's line buffer, or on a fresh one when the buffer
/// is already in use further up the stack.
fn with_scratch<R>(f: impl FnOnce(&mut Vec<u8>) -> R) -> R {
    SCRATCH.with(|cell| match cell.try_borrow_mut() {
        Ok(mut buf) => {
            buf.clear();
            f(&mut *buf)
        }
        Err(_) => f(&mut Vec::with_capacity(256)),
    })
}

/// A single destination with its own threshold, print-level, prefix and flags.
///
/// The mutex is held only to read the settings and, separately, for the
/// single `write` of a finished line. Message arguments are rendered with
/// no lock held, so a `Display` impl may itself log to the same stream.
pub struct Stream {
    inner: Mutex<Inner>,
}

struct Inner {
    writer: Box<dyn Write + Send>,
    level: Level,
    print_level: Level,
    prefix: Arc<[u8]>,
    flags: Flags,
}

impl Stream {
    /// Creates a logger over any writer.
    ///
    /// The append option is ignored; it only matters for [`Stream::file`].
    pub fn writer<W>(writer: W, options: impl Into<Options>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_boxed(Box::new(writer), &options.into())
    }

    pub(crate) fn from_boxed(writer: Box<dyn Write + Send>, options: &Options) -> Self {
        let config = options.resolve();
        Self {
            inner: Mutex::new(Inner {
                writer,
                level: config.level,
                print_level: config.print_level,
                prefix: Arc::from(config.prefix.into_bytes()),
                flags: config.flags,
            }),
        }
    }

    pub fn level(&self) -> Level {
        self.inner.lock().level
    }

    pub fn print_level(&self) -> Level {
        self.inner.lock().print_level
    }

    pub fn flags(&self) -> Flags {
        self.inner.lock().flags
    }

    pub fn prefix(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().prefix[..]).into_owned()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.inner.lock().flags = flags;
    }

    /// Formats and writes one line unless `level` is below the threshold.
    ///
    /// `Level::Print` is replaced by the print-level before filtering. The
    /// line goes out in a single `write` call; a short write is reported and
    /// not retried.
    pub fn output(
        &self,
        level: Level,
        caller: Option<&Location<'_>>,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        let (level, flags, prefix) = {
            let inner = self.inner.lock();
            let level = if level == Level::Print {
                inner.print_level
            } else {
                level
            };
            if level < inner.level {
                return Ok(());
            }
            (level, inner.flags, Arc::clone(&inner.prefix))
        };
        let line = Line {
            level,
            flags,
            prefix: &prefix[..],
            caller,
            time: Utc::now(),
        };
        with_scratch(|buf| -> Result<()> {
            line.write_to(buf, args)?;
            let written = self.inner.lock().writer.write(&buf[..])?;
            if written < buf.len() {
                return Err(LoggerError::short_write(written, buf.len()));
            }
            Ok(())
        })
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Stream")
            .field("level", &inner.level)
            .field("print_level", &inner.print_level)
            .field("prefix", &String::from_utf8_lossy(&inner.prefix[..]))
            .field("flags", &inner.flags)
            .finish_non_exhaustive()
    }
}

impl Log for Stream {
    fn set_level(&self, level: Level) {
        if level.is_sentinel() {
            tracing::warn!(?level, "ignoring sentinel level as threshold");
            return;
        }
        self.inner.lock().level = level;
    }

    fn set_prefix(&self, prefix: &str) {
        self.inner.lock().prefix = Arc::from(prefix.as_bytes());
    }

    fn set_print_level(&self, level: Level) {
        if level.is_sentinel() {
            tracing::warn!(?level, "ignoring sentinel level as print level");
            return;
        }
        self.inner.lock().print_level = level;
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Level::Trace, Some(Location::caller()), args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Level::Debug, Some(Location::caller()), args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Level::Info, Some(Location::caller()), args);
    }

    fn warning(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Level::Warning, Some(Location::caller()), args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Level::Error, Some(Location::caller()), args);
    }

    fn fatal(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Level::Fatal, Some(Location::caller()), args);
        exit_if_fatal();
    }

    fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.output(Level::Panic, Some(Location::caller()), args);
        panic!("{}", args);
    }

    fn print(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(Level::Print, Some(Location::caller()), args);
    }
}

impl LogWriter for Stream {
    fn log(&self, level: Level, _depth: usize, args: fmt::Arguments<'_>) -> Result<()> {
        // `#[track_caller]` already resolved the original call site.
        self.output(level, Some(Location::caller()), args)
    }
}
