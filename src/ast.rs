//! Formula syntax tree.
//!
//! Every composite node owns its children through a [`Box`]; trees are built
//! once by the parser and never mutated afterwards.

use std::fmt;

use crate::ops::{BinaryKind, BOTTOM, NOT, TOP};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    /// Constant `⊤` or `⊥`.
    Literal(bool),
    /// Free variable, named by a single token.
    Variable(char),
    Not(Box<Node>),
    BinaryOp(BinaryKind, Box<Node>, Box<Node>),
}

impl Node {
    pub fn literal(value: bool) -> Self {
        Node::Literal(value)
    }

    pub fn var(token: char) -> Self {
        Node::Variable(token)
    }

    pub fn not(operand: Self) -> Self {
        Node::Not(Box::new(operand))
    }

    pub fn binary(kind: BinaryKind, lhs: Self, rhs: Self) -> Self {
        Node::BinaryOp(kind, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Node::binary(BinaryKind::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Node::binary(BinaryKind::Or, lhs, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Node::binary(BinaryKind::Xor, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Node::binary(BinaryKind::Implies, lhs, rhs)
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Node::Literal(_) | Node::Variable(_) => 0,
            Node::Not(e) => 1 + e.depth(),
            Node::BinaryOp(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Node::Literal(_) | Node::Variable(_) => 1,
            Node::Not(e) => 1 + e.size(),
            Node::BinaryOp(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Literal(_) | Node::Variable(_))
    }
}

/// Fully parenthesised symbolic form; parsing it yields the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(true) => write!(f, "{}", TOP),
            Node::Literal(false) => write!(f, "{}", BOTTOM),
            Node::Variable(token) => write!(f, "{}", token),
            Node::Not(e) => write!(f, "{}{}", NOT, e),
            Node::BinaryOp(kind, l, r) => write!(f, "({} {} {})", l, kind, r),
        }
    }
}
