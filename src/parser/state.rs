//! Parse outcomes and the [`Parser`] trait every recognizer implements.
//!
//! A parse either fails with a [`ParseError`] or succeeds with a [`Success`]
//! holding the unconsumed tail of the input and the produced value. Since
//! [`ParseResult`] is a plain [`Result`], the usual combinators apply:
//! `is_ok`/`is_err` test the variant and `and_then` chains a follow-up step,
//! short-circuiting on failure. Inside the engine that chaining is spelled `?`.

use thiserror::Error;

use super::combinators::{Alt, Binder, BoxedParser, Mapper, Seq};

/// A failed parse.
///
/// Carries a human-readable message and nothing else: no position, no
/// expected-set. The wording is meant for people, not for matching on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A successful parse.
///
/// `tail` is always a suffix of the input handed to the parser that produced
/// this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<'a, T> {
    pub tail: &'a str,
    pub value: T,
}

impl<'a, T> Success<'a, T> {
    pub fn new(tail: &'a str, value: T) -> Self {
        Self { tail, value }
    }

    /// Replace the value, keeping the tail.
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Success<'a, U> {
        Success {
            tail: self.tail,
            value: f(self.value),
        }
    }
}

pub type ParseResult<'a, T> = Result<Success<'a, T>, ParseError>;

/// Something that recognizes a prefix of a string.
///
/// Implementations must be deterministic and hold no mutable state, so a
/// parser can be applied any number of times (and from any number of threads)
/// with the same outcome for the same input.
pub trait Parser {
    type Output;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output>;

    /// Transform the value of a successful parse.
    fn map<U, F>(self, f: F) -> Mapper<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Mapper::new(self, f)
    }

    /// Parse `self`, then `other` on the remaining input.
    fn then<P>(self, other: P) -> Seq<Self, P>
    where
        Self: Sized,
        P: Parser,
    {
        Seq::new(self, other)
    }

    /// Try `self`; if it fails, try `other` on the same input.
    fn or<P>(self, other: P) -> Alt<Self, P>
    where
        Self: Sized,
        P: Parser<Output = Self::Output>,
    {
        Alt::new(self, other)
    }

    /// Choose the next parser based on the value `self` produced.
    fn bind<P, F>(self, f: F) -> Binder<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> P,
        P: Parser,
    {
        Binder::new(self, f)
    }

    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::symbol;

    #[test]
    fn test_map_value_keeps_tail() {
        let success = Success::new("rest", 2).map_value(|v| v * 21);
        assert_eq!(success, Success::new("rest", 42));
    }

    #[test]
    fn test_error_displays_message() {
        let err = ParseError::new("symbol 'x' does not satisfy predicate: in [a]");
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_failure_short_circuits_and_then() {
        let failed: ParseResult<'_, char> = Err(ParseError::new("nope"));
        let chained = failed.and_then(|s| symbol('b').apply(s.tail));
        assert_eq!(chained, Err(ParseError::new("nope")));
    }
}
