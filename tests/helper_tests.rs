use descent::prelude::*;

fn letters() -> TakeIf {
    symbol("abcdefghijklmnopqrstuvwxyz")
}

#[test]
fn seq_family_spreads_arguments() {
    let one = seq1(letters(), |a| a.to_string());
    assert_eq!(one.apply("ab"), Ok(Success::new("b", "a".to_string())));

    let three = seq3(letters(), symbol('='), letters(), |l, _, r| (l, r));
    assert_eq!(three.apply("x=y;"), Ok(Success::new(";", ('x', 'y'))));

    let five = seq5(
        letters(),
        letters(),
        letters(),
        letters(),
        letters(),
        |a, b, c, d, e| [a, b, c, d, e].iter().collect::<String>(),
    );
    assert_eq!(five.apply("hello!"), Ok(Success::new("!", "hello".to_string())));
    assert!(five.apply("hell").is_err());
}

#[test]
fn alt_macro_folds_in_order() {
    let parser = alt!(
        string("for").map(|_| 1),
        string("fo").map(|_| 2),
        string("f").map(|_| 3),
    );
    assert_eq!(parser.apply("form"), Ok(Success::new("m", 1)));
    assert_eq!(parser.apply("fog"), Ok(Success::new("g", 2)));
    assert_eq!(parser.apply("fig"), Ok(Success::new("ig", 3)));
    assert!(parser.apply("x").is_err());
}

#[test]
fn alt_macro_single_alternative() {
    let parser = alt!(symbol('a'));
    assert_eq!(parser.apply("a"), Ok(Success::new("", 'a')));
}

#[test]
fn choice_over_runtime_list() {
    let keywords = ["let", "in", "if"];
    let parser = choice(
        string("fn"),
        keywords.iter().map(|keyword| string(keyword)),
    );
    assert_eq!(parser.apply("in x"), Ok(Success::new(" x", "in".to_string())));
    assert_eq!(parser.apply("fn x"), Ok(Success::new(" x", "fn".to_string())));
    assert!(parser.apply("while").is_err());
}

#[test]
fn optional_never_fails() {
    let sign = optional(symbol('-'), '+');
    assert_eq!(sign.apply("-5"), Ok(Success::new("5", '-')));
    assert_eq!(sign.apply("5"), Ok(Success::new("5", '+')));
    assert_eq!(sign.apply(""), Ok(Success::new("", '+')));
}

#[test]
fn many_of_collects_in_order() {
    let word = many_of(letters());
    assert_eq!(
        word.apply("abc1"),
        Ok(Success::new("1", vec!['a', 'b', 'c']))
    );
}

#[test]
fn many_of_matches_zero_times() {
    let word = many_of(letters());
    assert_eq!(word.apply("123"), Ok(Success::new("123", Vec::new())));
    assert_eq!(word.apply(""), Ok(Success::new("", Vec::new())));
}

#[test]
fn many_of_handles_long_runs() {
    let input = "a".repeat(1_000) + "b";
    let success = many_of(symbol('a')).apply(&input).expect("never fails");
    assert_eq!(success.value.len(), 1_000);
    assert_eq!(success.tail, "b");
}

#[test]
fn some_of_needs_one() {
    let word = some_of(letters());
    assert_eq!(word.apply("a1"), Ok(Success::new("1", vec!['a'])));
    assert!(word.apply("1").is_err());
}

#[test]
fn many_of_repeats_compound_parsers() {
    let pairs = many_of(seq2(letters(), symbol(';'), |c, _| c));
    assert_eq!(
        pairs.apply("a;b;c"),
        Ok(Success::new("c", vec!['a', 'b']))
    );
}

#[test]
fn take_exact_count() {
    let three = take(letters(), 3);
    assert_eq!(
        three.apply("abcd"),
        Ok(Success::new("d", vec!['a', 'b', 'c']))
    );
    assert!(three.apply("ab").is_err());
}

#[test]
fn take_zero_consumes_nothing() {
    assert_eq!(
        take(letters(), 0).apply("abc"),
        Ok(Success::new("abc", Vec::new()))
    );
}

#[test]
fn parse_all_rejects_leftovers() {
    let word = some_of(letters());
    assert_eq!(parse_all(&word, "abc"), Ok(vec!['a', 'b', 'c']));

    let err = parse_all(&word, "ab1").expect_err("digit left over");
    assert!(err.message().contains("\"1\""), "{}", err.message());
}

#[test]
fn boxed_parsers_compose_with_operators() {
    let digit = symbol("0123456789").boxed();
    let sign = symbol(['+', '-']).boxed();
    let signed = (sign + digit.clone()) >> |(s, d): (char, char)| format!("{s}{d}");
    let unsigned = digit >> |d: char| d.to_string();
    let number = signed | unsigned;

    assert_eq!(number.apply("-4"), Ok(Success::new("", "-4".to_string())));
    assert_eq!(number.apply("4"), Ok(Success::new("", "4".to_string())));
}
