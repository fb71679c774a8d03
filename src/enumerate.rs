//! Brute-force enumeration of truth assignments.
//!
//! Row `i` gives the variable at position `k` the value of bit `k` of `i`,
//! so row 0 is all-false and the first variable alternates fastest.

use log::{debug, warn};
use num_bigint::BigUint;

use crate::ast::Node;
use crate::error::Error;
use crate::eval::{Assignment, Eval};

/// Hard ceiling on the number of enumerated variables (row indices are `u64`).
pub const MAX_VARIABLES: usize = 63;

/// Tables above this many variables are logged as large.
const WARN_VARIABLES: usize = 16;

/// One evaluated row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub index: u64,
    pub assignment: Assignment,
    pub result: bool,
}

/// Number of rows needed for `count` variables, i.e. `2^count`.
pub fn row_count(count: usize) -> BigUint {
    BigUint::from(1u8) << count
}

/// Assignment of row `index` over `variables`.
///
/// When a token occurs at several positions, the value of its last position wins.
pub fn assignment_for(variables: &[char], index: u64) -> Assignment {
    variables
        .iter()
        .enumerate()
        .map(|(k, &token)| (token, (index >> k) & 1 != 0))
        .collect()
}

/// Iterator over all `2^n` assignments of `n` variables, in row order.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    variables: &'a [char],
    next: u64,
    end: u64,
}

impl<'a> Assignments<'a> {
    /// Fails with [`Error::TooManyVariables`] above [`MAX_VARIABLES`] variables.
    pub fn new(variables: &'a [char]) -> Result<Self, Error> {
        if variables.len() > MAX_VARIABLES {
            return Err(Error::TooManyVariables {
                count: variables.len(),
                limit: MAX_VARIABLES,
                rows: row_count(variables.len()),
            });
        }
        Ok(Self {
            variables,
            next: 0,
            end: 1u64 << variables.len(),
        })
    }
}

impl Iterator for Assignments<'_> {
    type Item = (u64, Assignment);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some((index, assignment_for(self.variables, index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Checks that `count` variables fit under `limit` (clamped to [`MAX_VARIABLES`]).
pub fn check_limit(count: usize, limit: usize) -> Result<(), Error> {
    let limit = limit.min(MAX_VARIABLES);
    if count > limit {
        return Err(Error::TooManyVariables {
            count,
            limit,
            rows: row_count(count),
        });
    }
    if count > WARN_VARIABLES {
        warn!("enumerating {} rows for {} variables", row_count(count), count);
    }
    Ok(())
}

/// Evaluates `node` under every assignment of `variables`.
///
/// Produces exactly `2^variables.len()` rows; no variables yield a single row.
pub fn enumerate(node: &Node, variables: &[char], limit: usize) -> Result<Vec<Row>, Error> {
    check_limit(variables.len(), limit)?;
    debug!("enumerate({}, vars = {:?})", node, variables);

    let mut rows = Vec::new();
    for (index, assignment) in Assignments::new(variables)? {
        let result = node.eval(&assignment)?;
        rows.push(Row {
            index,
            assignment,
            result,
        });
    }
    Ok(rows)
}
