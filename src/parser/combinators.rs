use std::ops::{Add, BitOr, Shr};
use std::sync::Arc;

use log::trace;

use super::state::{ParseResult, Parser, Success};

// === Binary combinators ===

/// Sequence: parse `first`, then `second` on what is left, yielding both values.
#[derive(Debug, Clone)]
pub struct Seq<A, B> {
    first: A,
    second: B,
}

impl<A: Parser, B: Parser> Seq<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Parser, B: Parser> Parser for Seq<A, B> {
    type Output = (A::Output, B::Output);

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let a = self.first.apply(input)?;
        let b = self.second.apply(a.tail)?;
        Ok(Success::new(b.tail, (a.value, b.value)))
    }
}

/// Ordered choice: the first alternative that succeeds wins.
///
/// When `first` fails, `second` runs against the original input and whatever
/// it returns is final, so a failing `Alt` reports only the second branch's
/// message.
#[derive(Debug, Clone)]
pub struct Alt<A, B> {
    first: A,
    second: B,
}

impl<A, B> Alt<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Parser for Alt<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    type Output = A::Output;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        self.first.apply(input).or_else(|err| {
            trace!("first alternative failed ({err}), backtracking");
            self.second.apply(input)
        })
    }
}

/// Transform the value of a successful parse.
#[derive(Clone)]
pub struct Mapper<P, F> {
    parser: P,
    f: F,
}

impl<P: Parser, F> Mapper<P, F> {
    pub fn new<U>(parser: P, f: F) -> Self
    where
        F: Fn(P::Output) -> U,
    {
        Self { parser, f }
    }
}

impl<P, F, U> Parser for Mapper<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, U> {
        self.parser
            .apply(input)
            .map(|success| success.map_value(&self.f))
    }
}

/// Monadic bind: the parser to run next is built from the previous value.
#[derive(Clone)]
pub struct Binder<P, F> {
    parser: P,
    bind: F,
}

impl<P: Parser, F> Binder<P, F> {
    pub fn new<Q>(parser: P, bind: F) -> Self
    where
        F: Fn(P::Output) -> Q,
        Q: Parser,
    {
        Self { parser, bind }
    }
}

impl<P, F, Q> Parser for Binder<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let first = self.parser.apply(input)?;
        (self.bind)(first.value).apply(first.tail)
    }
}

/// Deferred construction.
///
/// The supplier runs on every `apply`, which is what lets a rule refer to
/// itself. A rule that reaches itself again without consuming input (left
/// recursion) still recurses until the stack runs out.
#[derive(Clone)]
pub struct Lazy<F> {
    supplier: F,
}

impl<F> Lazy<F> {
    pub fn new<P>(supplier: F) -> Self
    where
        F: Fn() -> P,
        P: Parser,
    {
        Self { supplier }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Output = P::Output;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        (self.supplier)().apply(input)
    }
}

pub fn lazy<F, P>(supplier: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(supplier)
}

// === Boxed Parser for type erasure ===

type DynParser<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

/// A type-erased parser.
///
/// Recursive rules need a nameable return type, which is what this provides.
/// Cloning is cheap and shares the underlying parser.
pub struct BoxedParser<T> {
    parser: DynParser<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T> BoxedParser<T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<T> Parser for BoxedParser<T> {
    type Output = T;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        self.parser.apply(input)
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        BoxedParser::new(Seq::new(self, rhs))
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        BoxedParser::new(Alt::new(self, rhs))
    }
}

/// `>>` for map: A >> fn -> B
impl<T, U, F> Shr<F> for BoxedParser<T>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        BoxedParser::new(Mapper::new(self, f))
    }
}
