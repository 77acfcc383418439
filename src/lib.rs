//! # logx
//!
//! A leveled, multi-destination logging core.
//!
//! ## Features
//!
//! - **Severity gating**: ordered levels, per-backend threshold and print-level
//! - **Lean formatting**: header fields composed straight into a reused buffer
//! - **Multiple destinations**: console, file and any `io::Write` sink
//! - **Composite fan-out**: one call reaches every member, with `fatal` and
//!   `panic` acting only after all members were written
//! - **Thread safe**: one lock per backend, one write per line
//!
//! ```
//! use logx::prelude::*;
//! use std::sync::Arc;
//!
//! let console = Arc::new(Stream::console(Options::new().level(Level::Info)));
//! let audit = Stream::writer(std::io::sink(), [Opt::Prefix("audit".into())]);
//! let multi = Composite::with_members([Member::from(console), Member::from(audit)]);
//!
//! logx::info!(multi, "listening on {}", 8080);
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{Composite, Member, Nop, SharedWriter, Stream, NOP};
    pub use crate::core::{
        Flags, Level, Log, LogWriter, LoggerError, Opt, Options, Result,
    };
}

pub use crate::appenders::{
    reset_default_console, set_default_console, Composite, Member, Nop, SharedWriter, Stream,
    NOP,
};
pub use crate::core::{
    default_flags, fatal_exits, set_default_flags, set_fatal_exits, Config, Flags, Level, Line,
    Log, LogWriter, LoggerError, Opt, OptKind, Options, Result,
};
pub use crate::global::{global, set_global};

/// Creates a logger on the default console.
pub fn console(options: impl Into<Options>) -> Stream {
    Stream::console(options)
}

/// Creates a logger over `writer`.
pub fn writer<W>(writer: W, options: impl Into<Options>) -> Stream
where
    W: std::io::Write + Send + 'static,
{
    Stream::writer(writer, options)
}

/// Opens a file-backed logger, truncating the file unless the append option is set.
pub fn file(path: impl AsRef<std::path::Path>, options: impl Into<Options>) -> Result<Stream> {
    Stream::file(path, options)
}

/// Builds a composite over `members`, in dispatch order.
pub fn composite<I>(members: I) -> Composite
where
    I: IntoIterator,
    I::Item: Into<Member>,
{
    Composite::with_members(members)
}
