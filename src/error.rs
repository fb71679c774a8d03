//! Error types for parsing, evaluation and table construction.
//!
//! Parse errors and oversized tables are local to one formula: the caller
//! rejects that input line and moves on. [`EvalError`] signals that the
//! enumerator and the evaluator disagree on the variable set, which is a bug.

use std::fmt;

use num_bigint::BigUint;
use thiserror::Error;

/// Unmatched parenthesis, with the byte offset of the offending character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum UnbalancedError {
    /// A `)` with no pending `(`.
    #[error("unexpected ')' at offset {index} with no matching '('")]
    NoOpening { index: usize },
    /// A `(` still open at the end of input (the innermost one is reported).
    #[error("'(' at offset {index} is never closed")]
    NoClosing { index: usize },
}

/// Side of an operator whose operand is missing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OperandPosition {
    Left,
    Right,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandPosition::Left => write!(f, "left"),
            OperandPosition::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("unbalanced parentheses: {0}")]
    Unbalanced(#[from] UnbalancedError),
    #[error("operator '{operator}' is missing its {position} operand")]
    MissingOperand { operator: char, position: OperandPosition },
    #[error("malformed term {text:?}")]
    MalformedTerminal { text: String },
    /// The formula nests deeper than the configured limit.
    #[error("formula nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum EvalError {
    #[error("variable '{token}' has no value in the assignment")]
    UndefinedVariable { token: char },
}

/// Any failure of the parse → enumerate pipeline.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("{count} variables would need {rows} rows (limit is {limit} variables)")]
    TooManyVariables { count: usize, limit: usize, rows: BigUint },
}

impl Error {
    /// Whether the error only concerns the current formula.
    ///
    /// Evaluation errors are internal invariant violations and are not local.
    pub fn is_local(&self) -> bool {
        !matches!(self, Error::Eval(_))
    }
}

impl From<UnbalancedError> for Error {
    fn from(e: UnbalancedError) -> Self {
        Error::Parse(ParseError::Unbalanced(e))
    }
}
