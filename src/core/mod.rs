//! Core logger types and traits

pub mod error;
pub mod flags;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use flags::{default_flags, set_default_flags, Flags};
pub use formatter::Line;
pub use log_level::Level;
pub(crate) use logger::exit_if_fatal;
pub use logger::{fatal_exits, set_fatal_exits, Log, LogWriter};
pub use options::{Config, Opt, OptKind, Options};
pub use timestamp::Timestamp;
