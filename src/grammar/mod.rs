//! Example grammars built on the combinator engine.
//!
//! - `parens`: balanced parentheses, built twice (raw combinators and helpers)
//! - `expression`: arithmetic over decimal numbers, evaluated while parsing
//! - `printf`: a format string that decides which arguments must follow it

pub mod expression;
pub mod parens;
pub mod printf;
