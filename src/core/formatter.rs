//! Line composition
//!
//! A line is laid out as
//!
//! ```text
//! [YYYY/MM/DD ][HH:MM:SS[.ssssss] ][file:line: ][prefix ][LEVEL]: message\n
//! ```
//!
//! with each bracketed group present only when its flag is set (the prefix
//! group when the prefix is non-empty). Everything is appended to a caller
//! supplied buffer; the message itself is rendered from `fmt::Arguments`
//! straight into that buffer.

use super::flags::Flags;
use super::log_level::Level;
use super::timestamp::{itoa, Timestamp};
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;

const UNKNOWN_CALLER: &[u8] = b"??:0";

/// Everything that goes in front of the message.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub level: Level,
    pub flags: Flags,
    pub prefix: &'a [u8],
    /// Call site, `None` when it could not be resolved.
    pub caller: Option<&'a Location<'a>>,
    pub time: DateTime<Utc>,
}

impl Line<'_> {
    /// Appends the complete, newline-terminated line to `buf`.
    pub fn write_to(&self, buf: &mut Vec<u8>, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_header(buf);
        buf.push(b'[');
        buf.extend_from_slice(self.level.as_str().as_bytes());
        buf.extend_from_slice(b"]: ");
        match args.as_str() {
            Some(s) => buf.extend_from_slice(s.as_bytes()),
            None => buf.write_fmt(args)?,
        }
        if buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }
        Ok(())
    }

    fn write_header(&self, buf: &mut Vec<u8>) {
        let flags = self.flags;
        if flags.wants_clock() {
            let ts = Timestamp::from_datetime(&self.time, flags);
            if flags.contains(Flags::DATE) {
                ts.write_date(buf);
            }
            if flags.wants_time() {
                ts.write_time(buf, flags.contains(Flags::MICROSECONDS));
            }
        }
        if flags.wants_file() {
            match self.caller {
                Some(caller) => {
                    let file = if flags.contains(Flags::SHORT_FILE) {
                        short_file(caller.file())
                    } else {
                        caller.file()
                    };
                    buf.extend_from_slice(file.as_bytes());
                    buf.push(b':');
                    itoa(buf, u64::from(caller.line()), 0);
                }
                None => buf.extend_from_slice(UNKNOWN_CALLER),
            }
            buf.extend_from_slice(b": ");
        }
        if !self.prefix.is_empty() {
            buf.extend_from_slice(self.prefix);
            buf.push(b' ');
        }
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
