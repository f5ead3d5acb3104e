//! Property-based tests for the combinator laws.
//!
//! These check the invariants every parser must keep regardless of input:
//! tails are suffixes, `Return` is an identity on the input, repetition never
//! fails, and applying a parser twice gives the same answer.

use descent::prelude::*;
use descent::grammar::expression;
use proptest::prelude::*;

fn is_suffix(tail: &str, input: &str) -> bool {
    tail.len() <= input.len() && input.ends_with(tail)
}

/// A grammar mixing every combinator, for the shared properties below.
fn kitchen_sink() -> BoxedParser<String> {
    let word = some_of(symbol("abc")).map(|cs| cs.into_iter().collect::<String>());
    let number = expression::number().map(|n| n.to_string());
    let tagged = symbol('#').bind(|_| {
        take(not_symbol(' '), 2).map(|cs| cs.into_iter().collect::<String>())
    });
    alt!(word, number, tagged, string("xyz"), Return::new(String::new())).boxed()
}

proptest! {
    #[test]
    fn test_success_tail_is_suffix(input in "[abc0-9.#xyz ]{0,12}") {
        if let Ok(success) = kitchen_sink().apply(&input) {
            prop_assert!(is_suffix(success.tail, &input));
        }
    }

    #[test]
    fn test_repeat_tail_is_suffix(input in "[a-z ]{0,16}") {
        let success = many_of(not_symbol(' ')).apply(&input).expect("many_of never fails");
        prop_assert!(is_suffix(success.tail, &input));
        let consumed: String = success.value.into_iter().collect();
        prop_assert_eq!(format!("{consumed}{}", success.tail), input);
    }

    #[test]
    fn test_return_is_identity(input in ".{0,12}", value in any::<i64>()) {
        prop_assert_eq!(Return::new(value).apply(&input), Ok(Success::new(input.as_str(), value)));
    }

    #[test]
    fn test_many_of_never_fails(input in ".{0,12}") {
        prop_assert!(many_of(symbol("0123456789")).apply(&input).is_ok());
    }

    #[test]
    fn test_many_of_without_match_consumes_nothing(input in "[a-z]{0,12}") {
        prop_assert_eq!(
            many_of(symbol("0123456789")).apply(&input),
            Ok(Success::new(input.as_str(), Vec::new()))
        );
    }

    #[test]
    fn test_apply_is_deterministic(input in "[abc0-9.#xyz ]{0,12}") {
        let parser = kitchen_sink();
        prop_assert_eq!(parser.apply(&input), parser.apply(&input));
    }

    #[test]
    fn test_alt_equals_first_on_success_else_second(input in "[ab]{0,4}") {
        let first = seq2(symbol('a'), symbol('b'), |_, _| 1);
        let second = symbol('a').map(|_| 2);
        let expected = match first.apply(&input) {
            Ok(success) => Ok(success),
            Err(_) => second.apply(&input),
        };
        prop_assert_eq!(Alt::new(first, second).apply(&input), expected);
    }

    #[test]
    fn test_integers_round_trip(n in 0u32..1_000_000) {
        let text = n.to_string();
        let success = expression::number().apply(&text).expect("digits parse");
        prop_assert_eq!(success.value, f64::from(n));
        prop_assert_eq!(success.tail, "");
    }
}
