//! Truth tables: the parse → enumerate pipeline and its text rendering.

use std::fmt;

use crate::ast::Node;
use crate::config::Config;
use crate::enumerate::{enumerate, Row};
use crate::error::Error;
use crate::parser::parse_with_limit;
use crate::vars;

#[derive(Debug, Clone)]
pub struct TruthTable {
    formula: String,
    node: Node,
    variables: Vec<char>,
    rows: Vec<Row>,
}

/// Overall character of a formula, judged from its table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingent => write!(f, "contingent"),
        }
    }
}

impl TruthTable {
    /// Parses `formula` (symbolic tokens only) and evaluates every row.
    pub fn build(formula: &str, config: &Config) -> Result<Self, Error> {
        let node = parse_with_limit(formula, config.max_depth)?;
        let variables = if config.distinct_variables {
            vars::distinct(&node)
        } else {
            vars::collect(&node)
        };
        let rows = enumerate(&node, &variables, config.max_variables)?;
        Ok(Self {
            formula: formula.trim().to_string(),
            node,
            variables,
            rows,
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// Rows where the formula holds.
    pub fn satisfying_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter().filter(|row| row.result)
    }

    pub fn is_tautology(&self) -> bool {
        self.results().all(|r| r)
    }

    pub fn is_contradiction(&self) -> bool {
        self.results().all(|r| !r)
    }

    pub fn classify(&self) -> Classification {
        if self.is_tautology() {
            Classification::Tautology
        } else if self.is_contradiction() {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }

    /// Renders the table as text, one column per variable plus the result.
    pub fn render(&self, config: &Config) -> String {
        Rendered { table: self, config }.to_string()
    }

    fn write_table(&self, out: &mut fmt::Formatter<'_>, config: &Config) -> fmt::Result {
        let result_width = self.formula.chars().count().max(1);

        // Header
        for token in &self.variables {
            write!(out, " {} │", token)?;
        }
        writeln!(out, " {}", self.formula)?;

        // Rule
        for _ in &self.variables {
            write!(out, "───┼")?;
        }
        writeln!(out, "{}", "─".repeat(result_width + 2))?;

        for row in &self.rows {
            for &token in &self.variables {
                // Every listed variable is assigned by construction.
                let value = row.assignment.get(token).unwrap_or_default();
                write!(out, " {} │", config.glyph(value))?;
            }
            writeln!(out, " {}", config.glyph(row.result))?;
        }

        Ok(())
    }
}

struct Rendered<'a> {
    table: &'a TruthTable,
    config: &'a Config,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.write_table(f, self.config)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, &Config::default())
    }
}

/// Renders only the satisfying rows as `{A=1, B=0}` lines.
pub fn render_models(table: &TruthTable) -> String {
    table
        .satisfying_rows()
        .map(|row| format!("{}\n", row.assignment))
        .collect()
}
