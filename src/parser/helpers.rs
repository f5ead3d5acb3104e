//! Derived combinators.
//!
//! Nothing in here adds parsing behavior of its own: every helper is assembled
//! from [`Seq`], [`Alt`], [`Mapper`], [`Lazy`](super::Lazy) and [`Return`].
//!
//! The `seqN` family lets the final function take one argument per parser
//! instead of the right-nested pairs `Seq` produces:
//!
//! ```text
//! seq3(p1, p2, p3, f) == Mapper(Seq(p1, Seq(p2, p3)), |(x1, (x2, x3))| f(x1, x2, x3))
//! ```

use super::combinators::{Alt, BoxedParser, Mapper, Seq, lazy};
use super::primitives::Return;
use super::state::Parser;

pub fn seq1<P, F, Y>(p1: P, f: F) -> Mapper<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Y,
{
    Mapper::new(p1, f)
}

pub fn seq2<P1, P2, F, Y>(p1: P1, p2: P2, f: F) -> impl Parser<Output = Y> + Clone
where
    P1: Parser + Clone,
    P2: Parser + Clone,
    F: Fn(P1::Output, P2::Output) -> Y + Clone,
{
    Mapper::new(
        Seq::new(p1, p2),
        move |(x1, x2): (P1::Output, P2::Output)| f(x1, x2),
    )
}

pub fn seq3<P1, P2, P3, F, Y>(p1: P1, p2: P2, p3: P3, f: F) -> impl Parser<Output = Y> + Clone
where
    P1: Parser + Clone,
    P2: Parser + Clone,
    P3: Parser + Clone,
    F: Fn(P1::Output, P2::Output, P3::Output) -> Y + Clone,
{
    Mapper::new(
        Seq::new(p1, Seq::new(p2, p3)),
        move |(x1, (x2, x3)): (P1::Output, (P2::Output, P3::Output))| f(x1, x2, x3),
    )
}

pub fn seq4<P1, P2, P3, P4, F, Y>(
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    f: F,
) -> impl Parser<Output = Y> + Clone
where
    P1: Parser + Clone,
    P2: Parser + Clone,
    P3: Parser + Clone,
    P4: Parser + Clone,
    F: Fn(P1::Output, P2::Output, P3::Output, P4::Output) -> Y + Clone,
{
    #[allow(clippy::type_complexity)]
    let spread = move |(x1, (x2, (x3, x4))): (
        P1::Output,
        (P2::Output, (P3::Output, P4::Output)),
    )| f(x1, x2, x3, x4);
    Mapper::new(Seq::new(p1, Seq::new(p2, Seq::new(p3, p4))), spread)
}

pub fn seq5<P1, P2, P3, P4, P5, F, Y>(
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    p5: P5,
    f: F,
) -> impl Parser<Output = Y> + Clone
where
    P1: Parser + Clone,
    P2: Parser + Clone,
    P3: Parser + Clone,
    P4: Parser + Clone,
    P5: Parser + Clone,
    F: Fn(P1::Output, P2::Output, P3::Output, P4::Output, P5::Output) -> Y + Clone,
{
    #[allow(clippy::type_complexity)]
    let spread = move |(x1, (x2, (x3, (x4, x5)))): (
        P1::Output,
        (P2::Output, (P3::Output, (P4::Output, P5::Output))),
    )| f(x1, x2, x3, x4, x5);
    Mapper::new(Seq::new(p1, Seq::new(p2, Seq::new(p3, Seq::new(p4, p5)))), spread)
}

/// Ordered choice over any number of parsers with the same output type.
///
/// Folds [`Alt`](crate::Alt) from the left, so `alt!(a, b, c)` is
/// `Alt(Alt(a, b), c)` and the first alternative to match wins.
#[macro_export]
macro_rules! alt {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let parser = $first;
        $(let parser = $crate::Alt::new(parser, $rest);)*
        parser
    }};
}

/// [`alt!`] for a list of alternatives only known at runtime.
pub fn choice<T: 'static>(
    first: BoxedParser<T>,
    rest: impl IntoIterator<Item = BoxedParser<T>>,
) -> BoxedParser<T> {
    rest.into_iter()
        .fold(first, |acc, next| BoxedParser::new(Alt::new(acc, next)))
}

/// Never fails: `parser`'s result, or `default` without consuming input.
pub fn optional<P>(parser: P, default: P::Output) -> Alt<P, Return<P::Output>>
where
    P: Parser,
    P::Output: Clone,
{
    Alt::new(parser, Return::new(default))
}

/// One or more repetitions of `parser`, values in input order.
pub fn some_of<P>(parser: P) -> BoxedParser<Vec<P::Output>>
where
    P: Parser + Clone + Send + Sync + 'static,
    P::Output: Clone + Send + Sync + 'static,
{
    let first = parser.clone();
    seq2(first, lazy(move || many_of(parser.clone())), prepend).boxed()
}

/// Zero or more repetitions of `parser`. Never fails.
///
/// Stack depth grows with the number of matches.
pub fn many_of<P>(parser: P) -> BoxedParser<Vec<P::Output>>
where
    P: Parser + Clone + Send + Sync + 'static,
    P::Output: Clone + Send + Sync + 'static,
{
    optional(some_of(parser), Vec::new()).boxed()
}

/// Exactly `count` repetitions of `parser`.
pub fn take<P>(parser: P, count: usize) -> BoxedParser<Vec<P::Output>>
where
    P: Parser + Clone + Send + Sync + 'static,
    P::Output: Clone + Send + Sync + 'static,
{
    match count {
        0 => Return::new(Vec::new()).boxed(),
        n => seq2(parser.clone(), take(parser, n - 1), prepend).boxed(),
    }
}

fn prepend<T>(first: T, mut rest: Vec<T>) -> Vec<T> {
    rest.insert(0, first);
    rest
}
