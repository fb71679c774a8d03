//! Precedence-driven recursive parser.
//!
//! Each (sub)string is handled in isolation:
//!
//! 1. grouping is validated; an imbalance fails the whole formula,
//! 2. a redundant outer group `( ... )` is stripped when its interior is balanced,
//! 3. for each precedence level, loosest first, the first depth-0 occurrence of
//!    an operator of that level splits the string into two operands,
//! 4. otherwise the first depth-0 negation takes the rest of the string as operand,
//! 5. otherwise a single remaining character is a constant or a variable.
//!
//! Operators of lower precedence therefore always end up nearer the root.
//! Within a level the leftmost operator becomes the root, so `A∨B⊕C` reads
//! as `A∨(B⊕C)`. There is no backtracking: once a split is chosen, failure
//! in either operand fails the formula.

use log::{debug, trace};

use crate::ast::Node;
use crate::error::{OperandPosition, ParseError};
use crate::grouping::{self, CLOSE, OPEN};
use crate::ops::{BinaryKind, Precedence, BOTTOM, NOT, TOP};
use crate::segment::ungrouped_chars;

/// Nesting limit used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Parses a preprocessed formula (symbolic tokens only).
pub fn parse(s: &str) -> Result<Node, ParseError> {
    parse_with_limit(s, DEFAULT_MAX_DEPTH)
}

/// Parses `s`, refusing formulas that nest more than `max_depth` levels.
///
/// Every stripped group, operator and negation is one level, so
/// [`Node::depth`] of the result never exceeds `max_depth`.
pub fn parse_with_limit(s: &str, max_depth: usize) -> Result<Node, ParseError> {
    debug!("parse({:?})", s);
    grouping::validate(s)?;
    if grouping::max_nesting(s) > max_depth {
        return Err(ParseError::TooDeep { limit: max_depth });
    }
    let node = Parser { max_depth }.node(s, 0)?;
    debug!("parse({:?}) -> {}", s, node);
    Ok(node)
}

struct Parser {
    max_depth: usize,
}

impl Parser {
    fn node(&self, s: &str, depth: usize) -> Result<Node, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::TooDeep { limit: self.max_depth });
        }
        grouping::validate(s)?;
        let trimmed = s.trim();

        if let Some(inner) = strip_group(trimmed) {
            trace!("strip group {:?}", trimmed);
            return self.node(inner, depth + 1);
        }

        if let Some((index, kind)) = find_binary(s) {
            trace!("split {:?} at {} (offset {})", s, kind, index);
            let lhs = &s[..index];
            let rhs = &s[index + kind.token().len_utf8()..];
            let lhs = self.operand(lhs, kind.token(), OperandPosition::Left, depth)?;
            let rhs = self.operand(rhs, kind.token(), OperandPosition::Right, depth)?;
            return Ok(Node::binary(kind, lhs, rhs));
        }

        if let Some(index) = find_negation(s) {
            trace!("negation in {:?} at offset {}", s, index);
            let prefix = &s[..index];
            if !prefix.trim().is_empty() {
                return Err(ParseError::MalformedTerminal {
                    text: trimmed.to_string(),
                });
            }
            let operand = &s[index + NOT.len_utf8()..];
            let operand = self.operand(operand, NOT, OperandPosition::Right, depth)?;
            return Ok(Node::not(operand));
        }

        terminal(trimmed)
    }

    fn operand(&self, s: &str, operator: char, position: OperandPosition, depth: usize) -> Result<Node, ParseError> {
        if s.trim().is_empty() {
            return Err(ParseError::MissingOperand { operator, position });
        }
        self.node(s, depth + 1)
    }
}

/// Interior of `s` if `s` is wrapped in a removable pair of parentheses.
///
/// The interior must itself be balanced, which rejects `(A)∧(B)` where the
/// first and last characters belong to different groups.
fn strip_group(s: &str) -> Option<&str> {
    let inner = s.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
    if grouping::is_balanced(inner) {
        Some(inner)
    } else {
        None
    }
}

/// Leftmost depth-0 operator of the loosest level present in `s`.
fn find_binary(s: &str) -> Option<(usize, BinaryKind)> {
    Precedence::ALL.into_iter().find_map(|level| {
        ungrouped_chars(s).find_map(|(index, ch)| level.lookup(ch).map(|kind| (index, kind)))
    })
}

fn find_negation(s: &str) -> Option<usize> {
    ungrouped_chars(s).find(|&(_, ch)| ch == NOT).map(|(index, _)| index)
}

fn terminal(s: &str) -> Result<Node, ParseError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(TOP), None) => Ok(Node::Literal(true)),
        (Some(BOTTOM), None) => Ok(Node::Literal(false)),
        (Some(token), None) => Ok(Node::Variable(token)),
        _ => Err(ParseError::MalformedTerminal { text: s.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::UnbalancedError;

    fn var(token: char) -> Node {
        Node::var(token)
    }

    #[test]
    fn test_terminals() {
        assert_eq!(parse("A"), Ok(var('A')));
        assert_eq!(parse("  p "), Ok(var('p')));
        assert_eq!(parse("⊤"), Ok(Node::Literal(true)));
        assert_eq!(parse("⊥"), Ok(Node::Literal(false)));
    }

    #[test]
    fn test_and() {
        assert_eq!(parse("A∧B"), Ok(Node::and(var('A'), var('B'))));
        assert_eq!(parse("A ∧ B"), Ok(Node::and(var('A'), var('B'))));
    }

    #[test]
    fn test_not() {
        assert_eq!(parse("¬A"), Ok(Node::not(var('A'))));
        assert_eq!(parse("¬¬A"), Ok(Node::not(Node::not(var('A')))));
        assert_eq!(parse("¬(A∨B)"), Ok(Node::not(Node::or(var('A'), var('B')))));
    }

    #[test]
    fn test_negation_binds_tightest() {
        assert_eq!(parse("¬A∧B"), Ok(Node::and(Node::not(var('A')), var('B'))));
        assert_eq!(parse("A→¬B"), Ok(Node::implies(var('A'), Node::not(var('B')))));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse("A∧B∨C"), Ok(Node::or(Node::and(var('A'), var('B')), var('C'))));
        assert_eq!(parse("A∨B∧C"), Ok(Node::and(var('A'), Node::or(var('B'), var('C')))));
        assert_eq!(
            parse("A∧B→C∨D"),
            Ok(Node::implies(Node::and(var('A'), var('B')), Node::or(var('C'), var('D'))))
        );
    }

    #[test]
    fn test_grouping_overrides_precedence() {
        assert_eq!(parse("A∧(B∨C)"), Ok(Node::and(var('A'), Node::or(var('B'), var('C')))));
        assert_eq!(parse("(A∧B)∨C"), Ok(Node::or(Node::and(var('A'), var('B')), var('C'))));
    }

    #[test]
    fn test_same_level_splits_at_leftmost() {
        assert_eq!(parse("A∨B⊕C"), Ok(Node::or(var('A'), Node::xor(var('B'), var('C')))));
        assert_eq!(
            parse("A=B→C"),
            Ok(Node::binary(BinaryKind::Equals, var('A'), Node::implies(var('B'), var('C'))))
        );
        assert_eq!(
            parse("A→B≠C"),
            Ok(Node::implies(var('A'), Node::binary(BinaryKind::NotEquals, var('B'), var('C'))))
        );
    }

    #[test]
    fn test_redundant_groups() {
        let plain = parse("A∧B").unwrap();
        assert_eq!(parse("(A∧B)"), Ok(plain.clone()));
        assert_eq!(parse("((A∧B))"), Ok(plain.clone()));
        assert_eq!(parse(" ( (A) ∧ (B) ) "), Ok(plain));
    }

    #[test]
    fn test_outer_pair_of_different_groups() {
        assert_eq!(parse("(A)∧(B)"), Ok(Node::and(var('A'), var('B'))));
        assert_eq!(parse("(A)→(B)"), Ok(Node::implies(var('A'), var('B'))));
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(parse("(A"), Err(ParseError::Unbalanced(UnbalancedError::NoClosing { index: 0 })));
        assert_eq!(parse("A)"), Err(ParseError::Unbalanced(UnbalancedError::NoOpening { index: 1 })));
        assert_eq!(parse(")A("), Err(ParseError::Unbalanced(UnbalancedError::NoOpening { index: 0 })));
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            parse("∧B"),
            Err(ParseError::MissingOperand {
                operator: '∧',
                position: OperandPosition::Left
            })
        );
        assert_eq!(
            parse("A→ "),
            Err(ParseError::MissingOperand {
                operator: '→',
                position: OperandPosition::Right
            })
        );
        assert_eq!(
            parse("¬"),
            Err(ParseError::MissingOperand {
                operator: '¬',
                position: OperandPosition::Right
            })
        );
        assert_eq!(
            parse("A∧()"),
            Err(ParseError::MalformedTerminal { text: String::new() })
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse(""), Err(ParseError::MalformedTerminal { text: String::new() }));
        assert_eq!(parse("AB"), Err(ParseError::MalformedTerminal { text: "AB".to_string() }));
        assert_eq!(
            parse("A∧BC"),
            Err(ParseError::MalformedTerminal { text: "BC".to_string() })
        );
        assert_eq!(parse("A¬B"), Err(ParseError::MalformedTerminal { text: "A¬B".to_string() }));
    }

    #[test]
    fn test_display_reparses() {
        for input in ["A∧B∨C", "¬(A→B)⊕⊤", "(p=q)≠¬r", "A∧(B∨(C→D))"] {
            let node = parse(input).unwrap();
            assert_eq!(parse(&node.to_string()), Ok(node));
        }
    }

    #[test]
    fn test_depth_limit() {
        assert_eq!(parse_with_limit("A", 0), Ok(var('A')));
        assert_eq!(parse_with_limit("¬¬A", 2), Ok(Node::not(Node::not(var('A')))));
        assert_eq!(parse_with_limit("¬¬¬A", 2), Err(ParseError::TooDeep { limit: 2 }));
        assert_eq!(parse_with_limit("A∧B", 0), Err(ParseError::TooDeep { limit: 0 }));
        assert_eq!(parse_with_limit("((A))", 1), Err(ParseError::TooDeep { limit: 1 }));
        assert_eq!(parse_with_limit("((A))", 2), Ok(var('A')));
    }

    #[test]
    fn test_deep_groups_are_rejected() {
        let n = 100_000;
        let s = format!("{}A{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(parse(&s), Err(ParseError::TooDeep { limit: DEFAULT_MAX_DEPTH }));
    }

    #[test]
    fn test_deep_negation_is_rejected() {
        let s = format!("{}A", "¬".repeat(5000));
        assert_eq!(parse(&s), Err(ParseError::TooDeep { limit: DEFAULT_MAX_DEPTH }));

        let s = format!("{}A", "¬".repeat(DEFAULT_MAX_DEPTH));
        assert_eq!(parse(&s).map(|node| node.depth()), Ok(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn test_unbalanced_before_depth() {
        let s = "(".repeat(5000);
        assert_eq!(parse(&s), Err(ParseError::Unbalanced(UnbalancedError::NoClosing { index: 4999 })));
    }
}
