//! Property-based tests for logx using proptest

use logx::prelude::*;
use proptest::prelude::*;

fn real_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Trace),
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warning),
        Just(Level::Error),
        Just(Level::Fatal),
        Just(Level::Panic),
    ]
}

fn opt() -> impl Strategy<Value = Option<Opt>> {
    prop_oneof![
        Just(None),
        real_level().prop_map(|l| Some(Opt::Level(l))),
        real_level().prop_map(|l| Some(Opt::PrintLevel(l))),
        any::<bool>().prop_map(|a| Some(Opt::Append(a))),
        (0u32..64).prop_map(|b| Some(Opt::Flags(Flags::from_bits_truncate(b)))),
        "[a-z]{0,8}".prop_map(|p| Some(Opt::Prefix(p))),
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Names are five bytes wide for every raw value, in range or not
    #[test]
    fn test_level_name_fixed_width(raw in any::<u8>()) {
        let name = Level::name_of(raw);
        prop_assert_eq!(name.len(), 5);
        if raw > Level::MAX as u8 {
            prop_assert_eq!(name, "INVAL");
        }
    }

    /// `normal` keeps in-range requests and substitutes the default otherwise
    #[test]
    fn test_normal_signed(req in any::<i64>(), default in real_level()) {
        let got = Level::normal(req, default);
        if (0..=Level::MAX as i64).contains(&req) {
            prop_assert_eq!(got as i64, req);
        } else {
            prop_assert_eq!(got, default);
        }
    }

    #[test]
    fn test_normal_unsigned(req in any::<u64>(), default in real_level()) {
        let got = Level::normal_unsigned(req, default);
        if req <= Level::MAX as u64 {
            prop_assert_eq!(got as u64, req);
        } else {
            prop_assert_eq!(got, default);
        }
    }

    /// Display and parse agree for every real level
    #[test]
    fn test_level_str_roundtrip(level in real_level()) {
        let parsed: Level = level.as_str().parse().unwrap();
        prop_assert_eq!(parsed, level);
        prop_assert_eq!(level.to_string(), level.as_str());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A call emits exactly one line iff its level is at or above the threshold
    #[test]
    fn test_output_iff_level_at_least_threshold(level in real_level(), threshold in real_level()) {
        let sink = SharedWriter::new(Vec::new());
        let logger = Stream::writer(
            sink.clone(),
            Options::new().level(threshold).flags(Flags::NONE),
        );
        logger.log(level, 0, format_args!("sample")).unwrap();

        let out = sink.lock().clone();
        if level >= threshold {
            let expected = format!("[{}]: sample\n", level.as_str());
            prop_assert_eq!(out, expected.into_bytes());
        } else {
            prop_assert!(out.is_empty());
        }
    }

    /// Messages always come out as exactly one newline-terminated line
    #[test]
    fn test_single_terminated_line(message in "[^\n]{0,40}\n?") {
        let sink = SharedWriter::new(Vec::new());
        let logger = Stream::writer(sink.clone(), Options::new().flags(Flags::NONE));
        logger.error(format_args!("{}", message));

        let out = String::from_utf8(sink.lock().clone()).unwrap();
        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(out.matches('\n').count(), 1);
    }
}

fn all_real_levels() -> impl Iterator<Item = Level> {
    (0..=Level::MAX as u8).filter_map(Level::from_u8)
}

/// Every (level, threshold) pair, not just a sample of them.
#[test]
fn test_output_iff_level_at_least_threshold_all_pairs() {
    let mut pairs = 0;
    for threshold in all_real_levels() {
        for level in all_real_levels() {
            let sink = SharedWriter::new(Vec::new());
            let logger = Stream::writer(
                sink.clone(),
                Options::new().level(threshold).flags(Flags::NONE),
            );
            logger.log(level, 0, format_args!("sample")).unwrap();

            let out = sink.lock().clone();
            if level >= threshold {
                let expected = format!("[{}]: sample\n", level.as_str());
                assert_eq!(out, expected.into_bytes(), "{level:?} at {threshold:?}");
            } else {
                assert!(out.is_empty(), "{level:?} leaked past {threshold:?}");
            }
            pairs += 1;
        }
    }
    assert_eq!(pairs, 49);
}

// ============================================================================
// Option Resolution Tests
// ============================================================================

proptest! {
    /// The last option of each kind wins and unset kinds get defaults
    #[test]
    fn test_last_option_of_kind_wins(opts in proptest::collection::vec(opt(), 0..12)) {
        let config = Options::from_opts(opts.clone()).resolve();

        let last_level = opts.iter().rev().find_map(|o| match o {
            Some(Opt::Level(l)) => Some(*l),
            _ => None,
        });
        let last_print = opts.iter().rev().find_map(|o| match o {
            Some(Opt::PrintLevel(l)) => Some(*l),
            _ => None,
        });
        let last_prefix = opts.iter().rev().find_map(|o| match o {
            Some(Opt::Prefix(p)) => Some(p.clone()),
            _ => None,
        });
        let last_append = opts.iter().rev().find_map(|o| match o {
            Some(Opt::Append(a)) => Some(*a),
            _ => None,
        });

        prop_assert_eq!(config.level, last_level.unwrap_or(Level::Warning));
        prop_assert_eq!(config.print_level, last_print.unwrap_or(Level::Info));
        prop_assert_eq!(config.prefix, last_prefix.unwrap_or_default());
        prop_assert_eq!(config.append, last_append.unwrap_or(false));
    }

    /// Interleaving different kinds does not change the result
    #[test]
    fn test_cross_kind_order_irrelevant(
        level in real_level(),
        print in real_level(),
        prefix in "[a-z]{0,8}",
    ) {
        let forward = Options::from_opts([
            Opt::Level(level),
            Opt::PrintLevel(print),
            Opt::Prefix(prefix.clone()),
        ]);
        let backward = Options::from_opts([
            Opt::Prefix(prefix),
            Opt::PrintLevel(print),
            Opt::Level(level),
        ]);
        prop_assert_eq!(forward.resolve(), backward.resolve());
    }
}
