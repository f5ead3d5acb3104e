//! # Descent - backtracking recursive-descent parser combinators
//!
//! Descent builds parsers over in-memory strings out of a handful of pieces,
//! without hand-written parsing loops.
//!
//! ## Building Blocks
//!
//! 1. **Results** - a parse yields [`Success`] (unconsumed tail + value) or a
//!    [`ParseError`] with a human-readable message
//! 2. **Primitives** - [`Return`], [`TakeIf`], [`symbol`], [`not_symbol`], [`string`]
//! 3. **Combinators** - [`Seq`], [`Alt`], [`Mapper`], [`Binder`], [`lazy`]
//! 4. **Helpers** - `seq1`..`seq5`, [`alt!`], [`choice`], [`optional`],
//!    [`many_of`], [`some_of`], [`take`]
//!
//! ```text
//! primitives --> combinators --> helpers --> grammars
//!                                               |
//!                                  Parser::apply(&str) -> ParseResult
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Ordered choice
//! [`Alt`] commits to the first alternative that succeeds. Only when it fails
//! is the second alternative tried, against the original input. A failing
//! `Alt` reports the last alternative's message.
//!
//! ### Recursion through laziness
//! Grammar rules are plain functions returning parsers. A rule that refers to
//! itself must do so through [`lazy`], which builds the child only when it is
//! applied. Left-recursive rules still loop until the stack overflows.
//! Repetition is recursive as well, so every match of [`many_of`] or
//! [`some_of`] costs stack frames and very long runs can overflow the stack.
//!
//! ### No shared state
//! Parsers are immutable values and [`BoxedParser`] is `Send + Sync`, so one
//! grammar can serve any number of threads.
//!
//! ## Example
//!
//! ```
//! use descent::{Parser, Success, many_of, seq2, symbol};
//!
//! let word = seq2(symbol("abc"), many_of(symbol("abc")), |c, mut rest| {
//!     rest.insert(0, c);
//!     rest.into_iter().collect::<String>()
//! });
//! assert_eq!(word.apply("cab!"), Ok(Success::new("!", "cab".to_string())));
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - the combinator engine
//! - [`grammar`] - example grammars (parentheses, arithmetic, `printf`)

pub mod grammar;
pub mod parser;

pub use parser::*;

/// Everything needed to write a grammar.
pub mod prelude {
    pub use crate::alt;
    pub use crate::parser::*;
}
