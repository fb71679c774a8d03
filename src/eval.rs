use std::fmt;

use indexmap::IndexMap;

use crate::ast::Node;
use crate::error::EvalError;

/// Truth values for the variables of one table row.
///
/// Tokens keep the order in which they were first inserted.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    values: IndexMap<char, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `token`, replacing any previous value but keeping its position.
    pub fn insert(&mut self, token: char, value: bool) {
        self.values.insert(token, value);
    }

    pub fn get(&self, token: char) -> Option<bool> {
        self.values.get(&token).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (token, value) in iter {
            assignment.insert(token, value);
        }
        assignment
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (token, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", token, if *value { 1 } else { 0 })?;
        }
        write!(f, "}}")
    }
}

pub trait Eval {
    fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError>;
}

impl Eval for Node {
    /// Both operands of a binary node are always evaluated.
    fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Node::Literal(value) => Ok(*value),
            Node::Variable(token) => assignment
                .get(*token)
                .ok_or(EvalError::UndefinedVariable { token: *token }),
            Node::Not(e) => Ok(!e.eval(assignment)?),
            Node::BinaryOp(kind, l, r) => {
                let a = l.eval(assignment)?;
                let b = r.eval(assignment)?;
                Ok(kind.apply(a, b))
            }
        }
    }
}

/// Evaluates `node` under `assignment`.
pub fn evaluate(node: &Node, assignment: &Assignment) -> Result<bool, EvalError> {
    node.eval(assignment)
}
