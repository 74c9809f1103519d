//! Property-based tests for the scan/parse pipeline
//!
//! Three properties anchor the design:
//! - scanning is total: any input produces a token stream, never a failure
//! - detokenizing a scan reconstructs the source exactly
//! - when parsing succeeds, the chain's text preserves every text run in
//!   source order

use proptest::prelude::*;
use tagspan::markup::parsing::parse;
use tagspan::markup::pipeline::process_full;
use tagspan::markup::scanning::scan;
use tagspan::markup::segment::chain_text;
use tagspan::markup::token::detokenize;

/// Generate fragments that exercise tag-boundary handling: plain words,
/// angle-bracket noise, and complete tags.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,8}",
        Just("<".to_string()),
        Just("<b".to_string()),
        Just("</".to_string()),
        Just("<%>".to_string()),
        Just("<b>".to_string()),
        Just("</b>".to_string()),
    ]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn scan_is_total(input in "\\PC*") {
        let _ = scan(&input);
    }

    #[test]
    fn scan_round_trips_arbitrary_unicode(input in "\\PC*") {
        prop_assert_eq!(detokenize(&scan(&input)), input);
    }

    #[test]
    fn scan_round_trips_tag_boundaries(input in source_strategy()) {
        prop_assert_eq!(detokenize(&scan(&input)), input);
    }

    #[test]
    fn scan_is_deterministic(input in "\\PC*") {
        prop_assert_eq!(scan(&input), scan(&input));
    }

    #[test]
    fn pipeline_is_deterministic(input in source_strategy()) {
        prop_assert_eq!(process_full(&input), process_full(&input));
    }

    #[test]
    fn text_tokens_survive_parsing(input in source_strategy()) {
        let tokens = scan(&input);
        let expected: String = tokens.iter().filter_map(|token| token.as_text()).collect();
        if let Ok(chain) = parse(tokens) {
            prop_assert_eq!(chain_text(&chain), expected);
        }
    }
}
