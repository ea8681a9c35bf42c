//! Property tests for value round-trips and positional ordering.

use std::time::Duration;

use flagscan::{FlagValue, Parser, TextValue};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, .. ProptestConfig::default()
    })]

    #[test]
    fn int64_round_trips(v in any::<i64>()) {
        prop_assert_eq!(i64::parse_text(&v.format_value()).unwrap(), v);
    }

    #[test]
    fn int_round_trips(v in any::<i32>()) {
        prop_assert_eq!(i32::parse_text(&v.format_value()).unwrap(), v);
    }

    #[test]
    fn uint_round_trips(v in any::<u32>()) {
        prop_assert_eq!(u32::parse_text(&v.format_value()).unwrap(), v);
    }

    #[test]
    fn uint64_round_trips(v in any::<u64>()) {
        prop_assert_eq!(u64::parse_text(&v.format_value()).unwrap(), v);
    }

    #[test]
    fn float_round_trips(v in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_eq!(f64::parse_text(&v.format_value()).unwrap(), v);
    }

    #[test]
    fn duration_round_trips(secs in 0u64..2_000_000, nanos in 0u32..1_000_000_000) {
        let d = Duration::new(secs, nanos);
        prop_assert_eq!(Duration::parse_text(&d.format_value()).unwrap(), d);
    }

    #[test]
    fn string_round_trips(s in ".*") {
        prop_assert_eq!(String::parse_text(&s.format_value()).unwrap(), s);
    }

    #[test]
    fn positionals_keep_relative_order(
        items in proptest::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..12)
    ) {
        let mut parser = Parser::new("prop");
        let verbose = parser.bool(('v', "verbose"), false, "");

        let mut args = Vec::new();
        let mut words = Vec::new();
        let mut flags = 0;
        for (word, flag_first) in &items {
            if *flag_first {
                args.push("-v".to_string());
                flags += 1;
            }
            args.push(word.clone());
            words.push(word.clone());
        }

        parser.parse(args).unwrap();
        prop_assert_eq!(parser.args(), words.as_slice());
        prop_assert_eq!(parser.nflag(), flags);
        prop_assert_eq!(verbose.get(), flags > 0);
    }
}
