//! The combinator engine.
//!
//! - `state`: [`ParseResult`], [`Success`], [`ParseError`] and the [`Parser`] trait
//! - `primitives`: [`Return`], [`TakeIf`], [`symbol`], [`not_symbol`], [`string`]
//! - `combinators`: [`Seq`], [`Alt`], [`Mapper`], [`Binder`], [`Lazy`] and [`BoxedParser`]
//! - `helpers`: `seq1`..`seq5`, [`choice`], [`optional`], [`many_of`], [`some_of`], [`take`]

mod combinators;
mod helpers;
mod primitives;
mod state;

pub use combinators::*;
pub use helpers::*;
pub use primitives::*;
pub use state::*;

/// Apply `parser` and require it to consume the whole input.
pub fn parse_all<P: Parser>(parser: &P, input: &str) -> Result<P::Output, ParseError> {
    let Success { tail, value } = parser.apply(input)?;
    if tail.is_empty() {
        Ok(value)
    } else {
        Err(ParseError::new(format!("unexpected trailing input: {tail:?}")))
    }
}
