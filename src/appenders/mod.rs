//! Logger implementations

pub mod composite;
pub mod console;
pub mod file;
pub mod nop;
pub mod stream;

pub use composite::{Composite, Member};
pub use console::{reset_default_console, set_default_console, SharedWriter};
pub use nop::{Nop, NOP};
pub use stream::Stream;

// Re-export traits for convenience
pub use crate::core::{Log, LogWriter};
