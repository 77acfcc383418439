//! Backend construction options
//!
//! Options can be given as a list of [`Opt`] values, where the last value of
//! each kind wins, or built fluently on [`Options`]. Both resolve to a fully
//! populated [`Config`] once, when the backend is constructed.

use super::flags::{default_flags, Flags};
use super::log_level::Level;
use serde::{Deserialize, Serialize};

/// Discriminant of an [`Opt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptKind {
    Level,
    Flags,
    PrintLevel,
    Append,
    Prefix,
}

/// One construction setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opt {
    /// Severity threshold.
    Level(Level),
    /// Header field flags.
    Flags(Flags),
    /// Level substituted for print-style calls.
    PrintLevel(Level),
    /// Append to an existing file instead of truncating it. File backends only.
    Append(bool),
    /// Text written before the `[LEVEL]` column.
    Prefix(String),
}

impl Opt {
    pub fn kind(&self) -> OptKind {
        match self {
            Opt::Level(_) => OptKind::Level,
            Opt::Flags(_) => OptKind::Flags,
            Opt::PrintLevel(_) => OptKind::PrintLevel,
            Opt::Append(_) => OptKind::Append,
            Opt::Prefix(_) => OptKind::Prefix,
        }
    }
}

/// Unresolved settings. Fields left as `None` take their defaults in
/// [`Options::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub level: Option<Level>,
    pub flags: Option<Flags>,
    pub print_level: Option<Level>,
    pub append: Option<bool>,
    pub prefix: Option<String>,
}

/// Fully resolved settings. Levels are never sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub level: Level,
    pub flags: Flags,
    pub print_level: Level,
    pub append: bool,
    pub prefix: String,
}

impl Options {
    pub const DEFAULT_LEVEL: Level = Level::Warning;
    pub const DEFAULT_PRINT_LEVEL: Level = Level::Info;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a list of options once. `None` entries are skipped and the last
    /// value of each kind replaces earlier ones of the same kind.
    pub fn from_opts<I>(opts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Opt>>,
    {
        let mut options = Self::default();
        for opt in opts {
            let opt: Option<Opt> = opt.into();
            if let Some(opt) = opt {
                options.apply(opt);
            }
        }
        options
    }

    /// Applies one option over the current value of its kind.
    pub fn apply(&mut self, opt: Opt) {
        match opt {
            Opt::Level(level) => self.level = Some(level),
            Opt::Flags(flags) => self.flags = Some(flags),
            Opt::PrintLevel(level) => self.print_level = Some(level),
            Opt::Append(append) => self.append = Some(append),
            Opt::Prefix(prefix) => self.prefix = Some(prefix),
        }
    }

    /// Set the severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the header flags
    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Set the level used by print-style calls
    #[must_use = "builder methods return a new value"]
    pub fn print_level(mut self, level: Level) -> Self {
        self.print_level = Some(level);
        self
    }

    /// Append to an existing log file instead of truncating it
    #[must_use = "builder methods return a new value"]
    pub fn append(mut self, append: bool) -> Self {
        self.append = Some(append);
        self
    }

    /// Set the line prefix
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Fills every unset field with its default.
    ///
    /// A sentinel level counts as unset. Flags default to the process-wide
    /// [`default_flags`] as they are at the time of the call.
    pub fn resolve(&self) -> Config {
        Config {
            level: valid_or(self.level, Self::DEFAULT_LEVEL),
            flags: self.flags.unwrap_or_else(default_flags),
            print_level: valid_or(self.print_level, Self::DEFAULT_PRINT_LEVEL),
            append: self.append.unwrap_or(false),
            prefix: self.prefix.clone().unwrap_or_default(),
        }
    }
}

fn valid_or(level: Option<Level>, default: Level) -> Level {
    match level {
        Some(level) if !level.is_sentinel() => level,
        _ => default,
    }
}

impl FromIterator<Opt> for Options {
    fn from_iter<I: IntoIterator<Item = Opt>>(iter: I) -> Self {
        Self::from_opts(iter)
    }
}

impl FromIterator<Option<Opt>> for Options {
    fn from_iter<I: IntoIterator<Item = Option<Opt>>>(iter: I) -> Self {
        Self::from_opts(iter)
    }
}

impl From<Vec<Opt>> for Options {
    fn from(opts: Vec<Opt>) -> Self {
        Self::from_opts(opts)
    }
}

impl<const N: usize> From<[Opt; N]> for Options {
    fn from(opts: [Opt; N]) -> Self {
        Self::from_opts(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Options::new().resolve();
        assert_eq!(config.level, Level::Warning);
        assert_eq!(config.print_level, Level::Info);
        assert_eq!(config.flags, default_flags());
        assert!(!config.append);
        assert!(config.prefix.is_empty());
    }

    #[test]
    fn test_last_of_kind_wins() {
        let options = Options::from_opts([
            Some(Opt::Level(Level::Debug)),
            None,
            Some(Opt::Prefix("first".to_string())),
            Some(Opt::Level(Level::Error)),
            None,
            Some(Opt::Prefix("second".to_string())),
        ]);
        let config = options.resolve();
        assert_eq!(config.level, Level::Error);
        assert_eq!(config.prefix, "second");
        assert_eq!(config.print_level, Level::Info);
    }

    #[test]
    fn test_order_across_kinds_is_irrelevant() {
        let a: Options = [
            Opt::Level(Level::Trace),
            Opt::Append(true),
            Opt::PrintLevel(Level::Debug),
        ]
        .into();
        let b: Options = [
            Opt::PrintLevel(Level::Debug),
            Opt::Level(Level::Trace),
            Opt::Append(true),
        ]
        .into();
        assert_eq!(a, b);
        assert_eq!(a.resolve(), b.resolve());
    }

    #[test]
    fn test_sentinel_levels_fall_back_to_defaults() {
        let config = Options::new()
            .level(Level::Invalid)
            .print_level(Level::Print)
            .resolve();
        assert_eq!(config.level, Level::Warning);
        assert_eq!(config.print_level, Level::Info);
    }

    #[test]
    fn test_builder_matches_opt_list() {
        let built = Options::new()
            .level(Level::Info)
            .flags(Flags::UTC)
            .prefix("svc");
        let listed: Options = vec![
            Opt::Flags(Flags::UTC),
            Opt::Prefix("svc".into()),
            Opt::Level(Level::Info),
        ]
        .into();
        assert_eq!(built, listed);
    }

    #[test]
    fn test_opt_kind() {
        assert_eq!(Opt::Append(false).kind(), OptKind::Append);
        assert_eq!(Opt::PrintLevel(Level::Info).kind(), OptKind::PrintLevel);
        assert_ne!(Opt::Level(Level::Info).kind(), Opt::PrintLevel(Level::Info).kind());
    }
}
