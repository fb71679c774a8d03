//! # truth-table: propositional formulas and their truth tables
//!
//! **`truth-table`** parses propositional formulas written with single-character
//! symbolic operators, evaluates them under every assignment of their variables
//! and renders the result as a text table.
//!
//! ## Syntax
//!
//! | Token | Meaning     | Precedence           |
//! |-------|-------------|----------------------|
//! | `→`   | implication | 1 (loosest)          |
//! | `=`   | equivalence | 1                    |
//! | `≠`   | difference  | 1                    |
//! | `∧`   | conjunction | 2                    |
//! | `∨`   | disjunction | 3                    |
//! | `⊕`   | exclusive or| 3                    |
//! | `¬`   | negation    | binds tightest       |
//! | `⊤ ⊥` | constants   |                      |
//!
//! Any other single character is a variable. Parentheses group as usual.
//! Word spellings (`and`, `not`, `implies`, ...) are handled by [`preprocess`]
//! before parsing.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::{Config, TruthTable};
//!
//! let config = Config::default();
//! let table = TruthTable::build("A∧B∨C", &config).unwrap();
//!
//! // `∨` binds looser than `∧`, so this is `(A∧B)∨C`
//! assert_eq!(table.node().to_string(), "((A ∧ B) ∨ C)");
//! assert_eq!(table.variables(), &['A', 'B', 'C']);
//! assert_eq!(table.rows().len(), 8);
//!
//! println!("{}", table.render(&config));
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: precedence-driven recursive parser, built on [`grouping`] and [`segment`].
//! - **[`vars`]**, **[`eval`]**, **[`enumerate`]**: variable discovery, evaluation and row enumeration.
//! - **[`table`]**: the whole pipeline and its rendering.

pub mod ast;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod eval;
pub mod grouping;
pub mod ops;
pub mod parser;
pub mod preprocess;
pub mod segment;
pub mod table;
pub mod vars;

pub use ast::Node;
pub use config::Config;
pub use error::{Error, EvalError, ParseError, UnbalancedError};
pub use parser::{parse, parse_with_limit};
pub use table::TruthTable;
