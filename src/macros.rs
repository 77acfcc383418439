//! Logging macros for ergonomic log message formatting.
//!
//! Each macro forwards `format_args!` to the matching [`Log`](crate::Log)
//! method, so filtered levels never render their arguments and the call site
//! recorded for `file:line` is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use logx::prelude::*;
//! use logx::info;
//!
//! let logger = Stream::writer(std::io::sink(), Options::new().level(Level::Info));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Write one line at an explicit level through the direct sink.
///
/// Evaluates to the `Result` of [`LogWriter::log`](crate::LogWriter::log).
///
/// # Examples
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Stream::writer(std::io::sink(), Options::new());
/// use logx::log;
/// log!(logger, Level::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::LogWriter as _;
        $logger.log($level, 0, format_args!($($arg)+))
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.trace(format_args!($($arg)+))
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.debug(format_args!($($arg)+))
    }};
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Stream::writer(std::io::sink(), Options::new());
/// use logx::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.info(format_args!($($arg)+))
    }};
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.warning(format_args!($($arg)+))
    }};
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.error(format_args!($($arg)+))
    }};
}

/// Log a fatal-level message, then exit unless fatal exits are disabled.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.fatal(format_args!($($arg)+))
    }};
}

/// Log at the logger's print-level.
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.print(format_args!($($arg)+))
    }};
}

/// Log a panic-level message, then panic with it.
///
/// # Examples
///
/// ```should_panic
/// # use logx::prelude::*;
/// # let logger = Stream::writer(std::io::sink(), Options::new());
/// use logx::log_panic;
/// log_panic!(logger, "unrecoverable: {}", "state lost");
/// ```
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.panic(format_args!($($arg)+))
    }};
}
