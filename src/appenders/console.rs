//! Console backend and shared writers

use super::stream::Stream;
use crate::core::Options;
use parking_lot::{const_rwlock, Mutex, MutexGuard, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// A cloneable handle to a writer owned elsewhere.
///
/// Every clone writes through the same mutex, so a sink can be handed to
/// several loggers and still be inspected by its owner.
pub struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> SharedWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Locks the underlying writer.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.inner.lock()
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl<W> fmt::Debug for SharedWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish()
    }
}

type ConsoleSink = SharedWriter<Box<dyn Write + Send>>;

static DEFAULT_CONSOLE: RwLock<Option<ConsoleSink>> = const_rwlock(None);

/// Redirects console loggers created from now on to `writer`.
///
/// Loggers already built keep the sink they captured. Set this once at
/// start-up; swapping it while other threads construct loggers is racy.
pub fn set_default_console<W>(writer: W)
where
    W: Write + Send + 'static,
{
    let boxed: Box<dyn Write + Send> = Box::new(writer);
    *DEFAULT_CONSOLE.write() = Some(SharedWriter::new(boxed));
}

/// Restores standard error as the default console.
pub fn reset_default_console() {
    *DEFAULT_CONSOLE.write() = None;
}

fn default_console() -> Box<dyn Write + Send> {
    match DEFAULT_CONSOLE.read().as_ref() {
        Some(sink) => Box::new(sink.clone()),
        None => Box::new(io::stderr()),
    }
}

impl Stream {
    /// Creates a logger writing to the default console (standard error
    /// unless replaced with [`set_default_console`]).
    pub fn console(options: impl Into<Options>) -> Self {
        Self::from_boxed(default_console(), &options.into())
    }
}
