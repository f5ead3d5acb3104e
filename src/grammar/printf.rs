//! A `printf` call whose arguments must match its format string.
//!
//! ```text
//! printf   := "printf" '(' '"' format '"' args ')'
//! format   := [^%]* spec format | [^%"]*
//! spec     := "%s" | "%f"
//! args     := (',' arg)*        one per spec, in order
//! arg      := '"' [^"]* '"'     for %s
//!           | exp               for %f
//! ```
//!
//! The shape of `args` is not fixed by the grammar: it is built from the specs
//! found in the format string, through [`Parser::bind`].

use crate::alt;
use crate::grammar::expression::exp;
use crate::parser::{
    BoxedParser, Parser, Return, TakeIf, lazy, many_of, not_symbol, seq1, seq2, seq3, seq4, string,
    symbol,
};

/// A conversion specifier in the format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spec {
    /// `%s`, takes a quoted string.
    Str,
    /// `%f`, takes an arithmetic expression.
    Num,
}

fn quote() -> TakeIf {
    symbol('"')
}

/// spec := "%s" | "%f"
fn spec() -> impl Parser<Output = Spec> + Clone {
    alt!(
        seq2(symbol('%'), symbol('s'), |_, _| Spec::Str),
        seq2(symbol('%'), symbol('f'), |_, _| Spec::Num),
    )
}

/// format := [^%]* spec format | [^%"]*
pub fn format_string() -> BoxedParser<Vec<Spec>> {
    alt!(
        seq3(
            many_of(not_symbol('%')),
            spec(),
            lazy(format_string),
            |_, spec, mut specs: Vec<Spec>| {
                specs.insert(0, spec);
                specs
            },
        ),
        seq1(many_of(not_symbol(['%', '"'])), |_| Vec::<Spec>::new()),
    )
    .boxed()
}

/// quoted_format := '"' format '"'
pub fn quoted_format() -> impl Parser<Output = Vec<Spec>> + Clone {
    seq3(quote(), format_string(), quote(), |_, specs, _| specs)
}

fn str_arg() -> impl Parser<Output = ()> + Clone {
    seq3(quote(), many_of(not_symbol('"')), quote(), |_, _, _| ())
}

fn num_arg() -> impl Parser<Output = ()> + Clone {
    seq1(exp(), |_| ())
}

/// arg := ',' ('"' [^"]* '"' | exp)
fn argument(spec: Spec) -> BoxedParser<()> {
    match spec {
        Spec::Str => seq2(symbol(','), str_arg(), |_, _| ()).boxed(),
        Spec::Num => seq2(symbol(','), num_arg(), |_, _| ()).boxed(),
    }
}

/// One argument per spec, in order.
pub fn arguments(specs: Vec<Spec>) -> BoxedParser<()> {
    specs
        .into_iter()
        .map(argument)
        .fold(Return::new(()).boxed(), |args, arg| {
            seq2(args, arg, |_, _| ()).boxed()
        })
}

/// printf := "printf" '(' quoted_format args ')'
pub fn printf() -> impl Parser<Output = ()> + Clone {
    seq4(
        string("printf"),
        symbol('('),
        quoted_format().bind(arguments),
        symbol(')'),
        |_, _, _, _| (),
    )
}
