//! Date and time header fields
//!
//! Fields are written digit by digit into the line buffer through a small
//! stack scratch, so the hot path never goes through `format!`.

use super::flags::Flags;
use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike, Utc};

/// Appends `value` in decimal, left-padded with zeros to at least `width` digits.
pub(crate) fn itoa(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    let mut scratch = [0u8; 20];
    let mut pos = scratch.len();
    let mut width = width;
    while value >= 10 || width > 1 {
        pos -= 1;
        scratch[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        width = width.saturating_sub(1);
        if pos == 0 {
            break;
        }
    }
    if pos > 0 {
        pos -= 1;
        scratch[pos] = b'0' + value as u8;
    }
    buf.extend_from_slice(&scratch[pos..]);
}

/// Broken-down wall clock reading in the zone selected by the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub micros: u32,
}

impl Timestamp {
    /// Converts `time` to the local zone unless `UTC` is set.
    pub fn from_datetime(time: &DateTime<Utc>, flags: Flags) -> Self {
        let naive = if flags.contains(Flags::UTC) {
            time.naive_utc()
        } else {
            time.with_timezone(&Local).naive_local()
        };
        Self::from_naive(&naive)
    }

    fn from_naive(naive: &NaiveDateTime) -> Self {
        // Leap seconds show up as nanoseconds >= 1e9; fold them into the last micro.
        let micros = (naive.nanosecond() / 1_000).min(999_999);
        Self {
            year: naive.year(),
            month: naive.month(),
            day: naive.day(),
            hour: naive.hour(),
            minute: naive.minute(),
            second: naive.second(),
            micros,
        }
    }

    /// Writes `YYYY/MM/DD `. Negative years get a leading `-`.
    pub fn write_date(&self, buf: &mut Vec<u8>) {
        if self.year < 0 {
            buf.push(b'-');
        }
        itoa(buf, u64::from(self.year.unsigned_abs()), 4);
        buf.push(b'/');
        itoa(buf, u64::from(self.month), 2);
        buf.push(b'/');
        itoa(buf, u64::from(self.day), 2);
        buf.push(b' ');
    }

    /// Writes `HH:MM:SS ` or `HH:MM:SS.ssssss `.
    pub fn write_time(&self, buf: &mut Vec<u8>, micros: bool) {
        itoa(buf, u64::from(self.hour), 2);
        buf.push(b':');
        itoa(buf, u64::from(self.minute), 2);
        buf.push(b':');
        itoa(buf, u64::from(self.second), 2);
        if micros {
            buf.push(b'.');
            itoa(buf, u64::from(self.micros), 6);
        }
        buf.push(b' ');
    }
}
