//! Logger that writes nothing

use crate::core::{exit_if_fatal, Level, Log, LogWriter, Result};
use std::fmt;

/// Discards every line but keeps the control flow of `fatal` and `panic`.
///
/// Handy where an API wants a logger and logging is switched off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Nop;

/// Shared no-op instance.
pub static NOP: Nop = Nop;

impl Log for Nop {
    fn set_level(&self, _level: Level) {}

    fn set_prefix(&self, _prefix: &str) {}

    fn set_print_level(&self, _level: Level) {}

    fn trace(&self, _args: fmt::Arguments<'_>) {}

    fn debug(&self, _args: fmt::Arguments<'_>) {}

    fn info(&self, _args: fmt::Arguments<'_>) {}

    fn warning(&self, _args: fmt::Arguments<'_>) {}

    fn error(&self, _args: fmt::Arguments<'_>) {}

    fn fatal(&self, _args: fmt::Arguments<'_>) {
        exit_if_fatal();
    }

    fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        panic!("{}", args);
    }

    fn print(&self, _args: fmt::Arguments<'_>) {}
}

impl LogWriter for Nop {
    fn log(&self, _level: Level, _depth: usize, _args: fmt::Arguments<'_>) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::set_fatal_exits;

    #[test]
    fn test_nop_accepts_everything() {
        set_fatal_exits(false);
        NOP.set_level(Level::Trace);
        NOP.set_prefix("ignored");
        NOP.trace(format_args!("t"));
        NOP.info(format_args!("i {}", 1));
        NOP.print(format_args!("p"));
        NOP.fatal(format_args!("returns with exits disabled"));
        assert!(NOP.log(Level::Error, 3, format_args!("e")).is_ok());
    }

    #[test]
    #[should_panic(expected = "still panics: 5")]
    fn test_nop_panic_still_unwinds() {
        NOP.panic(format_args!("still panics: {}", 5));
    }
}
