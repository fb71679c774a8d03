use indexmap::IndexSet;

use crate::ast::Node;

/// Variable tokens of `node` in depth-first, left-to-right order.
///
/// Repeated occurrences are kept, one entry per position in the tree.
pub fn collect(node: &Node) -> Vec<char> {
    let mut vars = Vec::new();
    collect_into(node, &mut vars);
    vars
}

fn collect_into(node: &Node, vars: &mut Vec<char>) {
    match node {
        Node::Literal(_) => {}
        Node::Variable(token) => vars.push(*token),
        Node::Not(e) => collect_into(e, vars),
        Node::BinaryOp(_, l, r) => {
            collect_into(l, vars);
            collect_into(r, vars);
        }
    }
}

/// Variable tokens of `node` in order of first occurrence, without repeats.
pub fn distinct(node: &Node) -> Vec<char> {
    let vars: IndexSet<char> = collect(node).into_iter().collect();
    vars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse;

    #[test]
    fn test_collect_order() {
        let f = parse("(C∨A)∧¬B").unwrap();
        assert_eq!(collect(&f), vec!['C', 'A', 'B']);
    }

    #[test]
    fn test_collect_keeps_duplicates() {
        let f = parse("A∧(B→A)").unwrap();
        assert_eq!(collect(&f), vec!['A', 'B', 'A']);
        assert_eq!(distinct(&f), vec!['A', 'B']);
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let f = parse("(q∨p)∧(p→(r⊕q))").unwrap();
        assert_eq!(distinct(&f), vec!['q', 'p', 'r']);
    }

    #[test]
    fn test_literals_contribute_nothing() {
        let f = parse("⊤∨(⊥∧p)").unwrap();
        assert_eq!(collect(&f), vec!['p']);
        assert!(collect(&Node::Literal(false)).is_empty());
    }
}
