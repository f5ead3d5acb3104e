use std::fmt::Debug;

use anyhow::{Context, Result};
use clap::{Parser as _, ValueEnum};
use descent::grammar::{expression, parens, printf};
use descent::{Parser, parse_all};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Grammar {
    /// Balanced parentheses, printed as a tree
    Parens,
    /// Arithmetic expression, printed as its value
    Expr,
    /// printf call whose arguments must match the format string
    Printf,
}

/// Run one of the bundled grammars on an input string.
#[derive(Debug, clap::Parser)]
#[command(name = "descent", version)]
struct Cli {
    #[arg(value_enum)]
    grammar: Grammar,

    input: String,

    /// Accept a parse that leaves input behind, and print the tail
    #[arg(long)]
    partial: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let output = match cli.grammar {
        Grammar::Parens => render(&parens::parens(), &cli.input, cli.partial),
        Grammar::Expr => render(&expression::exp(), &cli.input, cli.partial),
        Grammar::Printf => render(&printf::printf(), &cli.input, cli.partial),
    }?;
    println!("{output}");
    Ok(())
}

/// Parse `input` and format the outcome for the terminal.
///
/// Without `partial` the whole input must be consumed and only the value is
/// shown. With `partial` a prefix is enough and the tail goes on a second line.
fn render<P>(parser: &P, input: &str, partial: bool) -> Result<String>
where
    P: Parser,
    P::Output: Debug,
{
    if partial {
        let success = parser
            .apply(input)
            .with_context(|| format!("failed to parse {input:?}"))?;
        Ok(format!("{:?}\ntail: {:?}", success.value, success.tail))
    } else {
        let value =
            parse_all(parser, input).with_context(|| format!("failed to parse {input:?}"))?;
        Ok(format!("{value:?}"))
    }
}
