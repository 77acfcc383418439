//! Header field flags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::sync::atomic::{AtomicU32, Ordering};

/// Bitmask selecting which header fields precede the `[LEVEL]: message` tail.
///
/// `SHORT_FILE` wins over `LONG_FILE` when both are set, and `MICROSECONDS`
/// implies the time field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// `YYYY/MM/DD`
    pub const DATE: Flags = Flags(1);
    /// `HH:MM:SS`
    pub const TIME: Flags = Flags(1 << 1);
    /// `HH:MM:SS.ssssss`
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path as recorded by the compiler.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Last path segment only.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Render date and time in UTC instead of the local zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Date and time, the out-of-the-box default.
    pub const STANDARD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL: u32 = (1 << 6) - 1;

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Keeps only known bits.
    pub const fn from_bits_truncate(bits: u32) -> Flags {
        Flags(bits & Self::ALL)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) const fn wants_time(self) -> bool {
        self.intersects(Flags(Self::TIME.0 | Self::MICROSECONDS.0))
    }

    pub(crate) const fn wants_clock(self) -> bool {
        self.intersects(Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0))
    }

    pub(crate) const fn wants_file(self) -> bool {
        self.intersects(Flags(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0 & Self::ALL)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 6] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
            (Flags::UTC, "UTC"),
        ];
        if self.is_empty() {
            return f.write_str("Flags(NONE)");
        }
        f.write_str("Flags(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

static DEFAULT_FLAGS: AtomicU32 = AtomicU32::new(Flags::STANDARD.bits());

/// Flags used by backends built without an explicit flags option.
pub fn default_flags() -> Flags {
    Flags(DEFAULT_FLAGS.load(Ordering::Relaxed))
}

/// Replaces the process-wide default flags.
///
/// Only affects backends constructed afterwards. Meant to be called once at
/// start-up, before concurrent logging begins.
pub fn set_default_flags(flags: Flags) {
    DEFAULT_FLAGS.store(flags.bits(), Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_date_and_time() {
        assert!(Flags::STANDARD.contains(Flags::DATE));
        assert!(Flags::STANDARD.contains(Flags::TIME));
        assert!(!Flags::STANDARD.contains(Flags::UTC));
    }

    #[test]
    fn test_microseconds_implies_time() {
        assert!(Flags::MICROSECONDS.wants_time());
        assert!(!Flags::DATE.wants_time());
        assert!(Flags::DATE.wants_clock());
        assert!(!Flags::SHORT_FILE.wants_clock());
    }

    #[test]
    fn test_bit_ops() {
        let flags = Flags::DATE | Flags::SHORT_FILE;
        assert!(flags.wants_file());
        assert_eq!(flags & Flags::DATE, Flags::DATE);
        assert!(!(flags & !Flags::DATE).contains(Flags::DATE));
        assert_eq!(Flags::from_bits_truncate(u32::MAX).bits(), 0b11_1111);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Flags::STANDARD), "Flags(DATE | TIME)");
        assert_eq!(format!("{:?}", Flags::NONE), "Flags(NONE)");
    }
}
