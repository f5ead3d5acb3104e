//! Primitive parsers: the constant parser and single-character recognizers.

use std::fmt;
use std::sync::Arc;

use log::trace;

use super::combinators::BoxedParser;
use super::helpers::seq2;
use super::state::{ParseError, ParseResult, Parser, Success};

/// Always succeeds with a clone of `value`, consuming nothing.
#[derive(Debug, Clone)]
pub struct Return<T> {
    value: T,
}

impl<T: Clone> Return<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Parser for Return<T> {
    type Output = T;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        Ok(Success::new(input, self.value.clone()))
    }
}

type Predicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Consumes one character if it satisfies `predicate`.
///
/// `description` names the predicate in failure messages.
#[derive(Clone)]
pub struct TakeIf {
    description: String,
    predicate: Predicate,
}

impl TakeIf {
    pub fn new(
        description: impl Into<String>,
        predicate: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for TakeIf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeIf")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Parser for TakeIf {
    type Output = char;

    fn apply<'a>(&self, input: &'a str) -> ParseResult<'a, char> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if (self.predicate)(c) => Ok(Success::new(chars.as_str(), c)),
            Some(c) => {
                trace!("rejected {c:?}, expected symbol {}", self.description);
                Err(ParseError::new(format!(
                    "symbol '{c}' does not satisfy predicate: {}",
                    self.description
                )))
            }
            None => {
                trace!("end of input, expected symbol {}", self.description);
                Err(ParseError::new(format!(
                    "input is empty, expected symbol {}",
                    self.description
                )))
            }
        }
    }
}

/// A set of characters accepted by [`symbol`] and [`not_symbol`].
pub trait Symbols {
    fn into_symbols(self) -> Vec<char>;
}

impl Symbols for char {
    fn into_symbols(self) -> Vec<char> {
        vec![self]
    }
}

impl<const N: usize> Symbols for [char; N] {
    fn into_symbols(self) -> Vec<char> {
        self.to_vec()
    }
}

impl Symbols for &[char] {
    fn into_symbols(self) -> Vec<char> {
        self.to_vec()
    }
}

/// Every character of the string is a member.
impl Symbols for &str {
    fn into_symbols(self) -> Vec<char> {
        self.chars().collect()
    }
}

fn list(set: &[char]) -> String {
    set.iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accepts one character from `set`.
pub fn symbol(set: impl Symbols) -> TakeIf {
    let set = set.into_symbols();
    TakeIf::new(format!("in [{}]", list(&set)), move |c| set.contains(&c))
}

/// Accepts one character that is not in `set`.
pub fn not_symbol(set: impl Symbols) -> TakeIf {
    let set = set.into_symbols();
    TakeIf::new(format!("not in [{}]", list(&set)), move |c| {
        !set.contains(&c)
    })
}

/// Recognizes `literal` as a contiguous prefix and yields it.
pub fn string(literal: &str) -> BoxedParser<String> {
    let mut chars = literal.chars();
    match chars.next() {
        Some(first) => seq2(symbol(first), string(chars.as_str()), |c, mut rest| {
            rest.insert(0, c);
            rest
        })
        .boxed(),
        None => Return::new(String::new()).boxed(),
    }
}
