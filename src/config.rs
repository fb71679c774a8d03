use crate::enumerate::MAX_VARIABLES;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Options for building and rendering truth tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of enumerated variables; never more than [`MAX_VARIABLES`].
    pub max_variables: usize,
    /// Drive every distinct variable token by one bit (otherwise one bit per occurrence).
    pub distinct_variables: bool,
    /// Maximum nesting depth of a parsed formula.
    ///
    /// Every later pass recurses over the tree, so this also bounds their stack use.
    pub max_depth: usize,
    pub true_glyph: char,
    pub false_glyph: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_variables: 20,
            distinct_variables: true,
            max_depth: DEFAULT_MAX_DEPTH,
            true_glyph: 'T',
            false_glyph: 'F',
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables.min(MAX_VARIABLES);
        self
    }

    pub fn with_distinct_variables(mut self, distinct: bool) -> Self {
        self.distinct_variables = distinct;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_glyphs(mut self, true_glyph: char, false_glyph: char) -> Self {
        self.true_glyph = true_glyph;
        self.false_glyph = false_glyph;
        self
    }

    pub fn glyph(&self, value: bool) -> char {
        if value {
            self.true_glyph
        } else {
            self.false_glyph
        }
    }
}
