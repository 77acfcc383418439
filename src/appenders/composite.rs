//! Composite logger fanning every call out to several members

use super::stream::Stream;
use crate::core::{exit_if_fatal, Level, Log, LogWriter, LoggerError, Result};
use std::fmt;
use std::sync::Arc;

/// One entry of a [`Composite`], classified when it is added.
#[derive(Clone)]
pub enum Member {
    /// Supports the direct sink; receives depth-adjusted `log` calls.
    Writer(Arc<dyn LogWriter>),
    /// Only the named severity methods are available.
    Named(Arc<dyn Log>),
}

impl Member {
    pub fn writer(logger: Arc<dyn LogWriter>) -> Self {
        Member::Writer(logger)
    }

    pub fn named(logger: Arc<dyn Log>) -> Self {
        Member::Named(logger)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Writer(_) => f.write_str("Member::Writer(..)"),
            Member::Named(_) => f.write_str("Member::Named(..)"),
        }
    }
}

impl From<Arc<Stream>> for Member {
    fn from(stream: Arc<Stream>) -> Self {
        Member::Writer(stream)
    }
}

impl From<Stream> for Member {
    fn from(stream: Stream) -> Self {
        Member::Writer(Arc::new(stream))
    }
}

impl From<Arc<Composite>> for Member {
    fn from(composite: Arc<Composite>) -> Self {
        Member::Writer(composite)
    }
}

impl From<Arc<dyn LogWriter>> for Member {
    fn from(logger: Arc<dyn LogWriter>) -> Self {
        Member::Writer(logger)
    }
}

impl From<Arc<dyn Log>> for Member {
    fn from(logger: Arc<dyn Log>) -> Self {
        Member::Named(logger)
    }
}

/// Ordered set of loggers that all receive every call.
///
/// The composite holds shared handles and takes no part in closing or
/// flushing its members. It has no lock of its own: each member is expected
/// to be thread-safe and only ever sees whole calls.
///
/// `fatal` and `panic` write to every member before acting. Members that
/// expose the direct sink get the real level; named-only members get
/// `error`, since their own `fatal` or `panic` would stop the process
/// before the remaining members were written.
#[derive(Debug, Default, Clone)]
pub struct Composite {
    members: Vec<Member>,
}

impl Composite {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let mut composite = Self::new();
        for member in members {
            composite.add(member);
        }
        composite
    }

    /// Appends a member at the end of the dispatch order.
    pub fn add(&mut self, member: impl Into<Member>) {
        let member = member.into();
        tracing::trace!(?member, position = self.members.len(), "composite member added");
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Sends one line to every member in order.
    ///
    /// Direct sinks get `depth + 1` to account for this frame. Write errors
    /// do not stop the fan-out; the first one is returned at the end.
    #[track_caller]
    fn dispatch(&self, level: Level, depth: usize, args: fmt::Arguments<'_>) -> Result<()> {
        let mut first_err: Option<LoggerError> = None;
        for member in &self.members {
            match member {
                Member::Writer(w) => {
                    if let Err(e) = w.log(level, depth + 1, args) {
                        first_err.get_or_insert(e);
                    }
                }
                Member::Named(l) => match level {
                    Level::Trace => l.trace(args),
                    Level::Debug => l.debug(args),
                    Level::Info => l.info(args),
                    Level::Warning => l.warning(args),
                    Level::Print => l.print(args),
                    Level::Error | Level::Fatal | Level::Panic | Level::Invalid => l.error(args),
                },
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

impl Log for Composite {
    fn set_level(&self, level: Level) {
        for member in &self.members {
            match member {
                Member::Writer(w) => w.set_level(level),
                Member::Named(l) => l.set_level(level),
            }
        }
    }

    fn set_prefix(&self, prefix: &str) {
        for member in &self.members {
            match member {
                Member::Writer(w) => w.set_prefix(prefix),
                Member::Named(l) => l.set_prefix(prefix),
            }
        }
    }

    fn set_print_level(&self, level: Level) {
        for member in &self.members {
            match member {
                Member::Writer(w) => w.set_print_level(level),
                Member::Named(l) => l.set_print_level(level),
            }
        }
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(Level::Trace, 0, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(Level::Debug, 0, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(Level::Info, 0, args);
    }

    fn warning(&self, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(Level::Warning, 0, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(Level::Error, 0, args);
    }

    fn fatal(&self, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(Level::Fatal, 0, args);
        exit_if_fatal();
    }

    fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.dispatch(Level::Panic, 0, args);
        panic!("{}", args);
    }

    fn print(&self, args: fmt::Arguments<'_>) {
        let _ = self.dispatch(Level::Print, 0, args);
    }
}

impl LogWriter for Composite {
    fn log(&self, level: Level, depth: usize, args: fmt::Arguments<'_>) -> Result<()> {
        self.dispatch(level, depth, args)
    }
}
