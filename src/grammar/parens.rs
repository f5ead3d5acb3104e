//! Balanced parentheses: `S -> (S)S | ε`.

use crate::parser::{
    Alt, BoxedParser, Mapper, Parser, Return, Seq, TakeIf, lazy, optional, seq4, symbol,
};

/// Derivation tree of a balanced sequence: each `Node` is one `(left)right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    Leaf,
    Node(Box<Tree>, Box<Tree>),
}

impl Tree {
    pub fn node(left: Tree, right: Tree) -> Self {
        Tree::Node(Box::new(left), Box::new(right))
    }

    /// Maximum nesting depth of the parentheses this tree was parsed from.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Leaf => 0,
            Tree::Node(left, right) => (left.depth() + 1).max(right.depth()),
        }
    }
}

fn open() -> TakeIf {
    symbol('(')
}

fn close() -> TakeIf {
    symbol(')')
}

/// parens := '(' parens ')' parens | ε
///
/// Spelled out with the binary combinators only.
pub fn parens() -> BoxedParser<Tree> {
    let tail = Seq::new(close(), lazy(parens));
    let pair = Seq::new(open(), Seq::new(lazy(parens), tail));
    let node = Mapper::new(pair, |(_, (left, (_, right)))| Tree::node(left, right));
    Alt::new(node, Return::new(Tree::Leaf)).boxed()
}

/// parens := '(' parens ')' parens | ε
///
/// Same grammar, written with the derived helpers.
pub fn parens_helpers() -> BoxedParser<Tree> {
    optional(
        seq4(
            open(),
            lazy(parens_helpers),
            close(),
            lazy(parens_helpers),
            |_, left, _, right| Tree::node(left, right),
        ),
        Tree::Leaf,
    )
    .boxed()
}
