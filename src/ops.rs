//! Operator tokens and their binding strength.
//!
//! Precedence is enforced by the order in which the parser tries to split a
//! formula: the loosest level is tried first, so its operators end up closest
//! to the root. Negation is not in the table; it is tried after every binary
//! level has failed and therefore binds tightest.

use std::fmt;

pub const NOT: char = '¬';
pub const TOP: char = '⊤';
pub const BOTTOM: char = '⊥';

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryKind {
    And,
    Or,
    Xor,
    Implies,
    Equals,
    NotEquals,
}

impl BinaryKind {
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinaryKind::And => a && b,
            BinaryKind::Or => a || b,
            BinaryKind::Xor => a != b,
            BinaryKind::Implies => !a || b,
            BinaryKind::Equals => a == b,
            BinaryKind::NotEquals => a != b,
        }
    }

    pub fn token(self) -> char {
        match self {
            BinaryKind::And => '∧',
            BinaryKind::Or => '∨',
            BinaryKind::Xor => '⊕',
            BinaryKind::Implies => '→',
            BinaryKind::Equals => '=',
            BinaryKind::NotEquals => '≠',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            BinaryKind::Implies | BinaryKind::Equals | BinaryKind::NotEquals => Precedence::Conditional,
            BinaryKind::And => Precedence::Conjunction,
            BinaryKind::Or | BinaryKind::Xor => Precedence::Disjunction,
        }
    }

    pub fn from_token(token: char) -> Option<BinaryKind> {
        OPERATORS.iter().copied().find(|kind| kind.token() == token)
    }
}

impl fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Binding strength, from loosest to tightest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Precedence {
    Conditional = 1,
    Conjunction = 2,
    Disjunction = 3,
}

impl Precedence {
    /// Levels in split order.
    pub const ALL: [Precedence; 3] = [Precedence::Conditional, Precedence::Conjunction, Precedence::Disjunction];

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Operator kinds of this level, in declaration order.
    pub fn operators(self) -> impl Iterator<Item = BinaryKind> {
        OPERATORS.into_iter().filter(move |kind| kind.precedence() == self)
    }

    /// The operator of this level denoted by `token`, if any.
    pub fn lookup(self, token: char) -> Option<BinaryKind> {
        self.operators().find(|kind| kind.token() == token)
    }
}

/// All binary operators in declaration order.
///
/// Within one level this order is the tie-break, although the parser scans
/// for every token of the level at once, so in practice the leftmost
/// occurrence wins.
pub const OPERATORS: [BinaryKind; 6] = [
    BinaryKind::Implies,
    BinaryKind::Equals,
    BinaryKind::NotEquals,
    BinaryKind::And,
    BinaryKind::Or,
    BinaryKind::Xor,
];
