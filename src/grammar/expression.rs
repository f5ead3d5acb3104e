//! Arithmetic expressions over decimal numbers, evaluated while parsing.
//!
//! ```text
//! number := integer fractional?
//! op1    := '+' | '-'
//! op2    := '*' | '/'
//! exp    := term exp1 | term
//! exp1   := op1 term exp1 | op1 term
//! term   := factor term1 | factor
//! term1  := op2 factor term1 | op2 factor
//! factor := number | '(' exp ')' | '-' factor
//! ```
//!
//! `exp1` and `term1` yield the rest of the chain as a function still waiting
//! for its left operand, which keeps `-` and `/` left-associative without a
//! left-recursive rule.

use crate::alt;
use crate::parser::{BoxedParser, Parser, lazy, many_of, optional, seq2, seq3, some_of, symbol};

type BinOp = fn(f64, f64) -> f64;

/// The operators and operands to the right of a left operand.
type Chain = Box<dyn Fn(f64) -> f64>;

fn digit0() -> impl Parser<Output = u32> + Clone {
    symbol('0').map(|_| 0_u32)
}

fn digit19() -> impl Parser<Output = u32> + Clone {
    symbol("123456789").map(|c| u32::from(c) - u32::from('0'))
}

fn digit() -> impl Parser<Output = u32> + Clone {
    alt!(digit0(), digit19())
}

/// integer := [1-9] digit* | '0'
pub fn integer() -> impl Parser<Output = f64> + Clone {
    alt!(
        seq2(digit19(), many_of(digit()), |first, rest: Vec<u32>| {
            rest.into_iter()
                .fold(f64::from(first), |acc, d| acc * 10.0 + f64::from(d))
        }),
        digit0().map(f64::from),
    )
}

/// fractional := '.' digit+
pub fn fractional() -> impl Parser<Output = f64> + Clone {
    seq2(symbol('.'), some_of(digit()), |_, digits: Vec<u32>| {
        digits
            .into_iter()
            .rev()
            .fold(0.0, |acc, d| (acc + f64::from(d)) / 10.0)
    })
}

/// number := integer fractional?
pub fn number() -> impl Parser<Output = f64> + Clone {
    let fraction = optional(fractional(), 0.0);
    seq2(integer(), fraction, |int, frac| int + frac)
}

fn operator(c: char, op: BinOp) -> impl Parser<Output = BinOp> + Clone {
    symbol(c).map(move |_| op)
}

/// op1 := '+' | '-'
fn op1() -> impl Parser<Output = BinOp> + Clone {
    alt!(operator('+', |a, b| a + b), operator('-', |a, b| a - b))
}

/// op2 := '*' | '/'
fn op2() -> impl Parser<Output = BinOp> + Clone {
    alt!(operator('*', |a, b| a * b), operator('/', |a, b| a / b))
}

/// exp := term exp1 | term
pub fn exp() -> BoxedParser<f64> {
    let chained = seq2(lazy(term), lazy(exp1), |a, rest: Chain| rest(a));
    alt!(chained, lazy(term)).boxed()
}

/// exp1 := op1 term exp1 | op1 term
fn exp1() -> BoxedParser<Chain> {
    let longer = seq3(op1(), term(), lazy(exp1), extend);
    alt!(longer, seq2(op1(), term(), finish)).boxed()
}

/// term := factor term1 | factor
fn term() -> BoxedParser<f64> {
    let chained = seq2(factor(), term1(), |a, rest: Chain| rest(a));
    alt!(chained, factor()).boxed()
}

/// term1 := op2 factor term1 | op2 factor
fn term1() -> BoxedParser<Chain> {
    let longer = seq3(op2(), factor(), lazy(term1), extend);
    alt!(longer, seq2(op2(), factor(), finish)).boxed()
}

/// Puts `op b` in front of the rest of a chain.
fn extend(op: BinOp, b: f64, rest: Chain) -> Chain {
    Box::new(move |a: f64| rest(op(a, b)))
}

/// The last `op b` of a chain.
fn finish(op: BinOp, b: f64) -> Chain {
    Box::new(move |a: f64| op(a, b))
}

/// factor := number | '(' exp ')' | '-' factor
fn factor() -> BoxedParser<f64> {
    alt!(
        number(),
        seq3(symbol('('), exp(), symbol(')'), |_, value, _| value),
        seq2(symbol('-'), lazy(factor), |_, value: f64| -value),
    )
    .boxed()
}
