//! Truth table representation.
//!
//! A formula over n variables has a truth table of 2ⁿ rows. Row `i` assigns
//! the variable at sorted position `j` the value of bit `j` of `i`, so the
//! first variable is the least significant bit.
//!
//! For n=2 with variables `[a, b]`:
//! - Row 0 (binary 00): a=F, b=F
//! - Row 1 (binary 01): a=T, b=F
//! - Row 2 (binary 10): a=F, b=T
//! - Row 3 (binary 11): a=T, b=T

use std::collections::BTreeMap;

/// Values of all variables in one row.
pub type Assignment = BTreeMap<String, bool>;

/// Builds the assignment of row `index`.
pub fn assignment(variables: &[String], index: usize) -> Assignment {
    variables
        .iter()
        .enumerate()
        .map(|(j, name)| (name.clone(), (index >> j) & 1 == 1))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<Assignment>,
    results: Vec<bool>,
}

impl TruthTable {
    /// Creates a table from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `rows` and `results` do not both have `2^variables.len()` entries.
    pub fn new(variables: Vec<String>, rows: Vec<Assignment>, results: Vec<bool>) -> Self {
        let expected = 1usize << variables.len();
        assert_eq!(
            rows.len(),
            expected,
            "Expected {} rows for {} variables, got {}",
            expected,
            variables.len(),
            rows.len()
        );
        assert_eq!(rows.len(), results.len(), "Every row needs exactly one result");
        Self {
            variables,
            rows,
            results,
        }
    }

    /// Variables in bit order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[Assignment] {
        &self.rows
    }

    pub fn results(&self) -> &[bool] {
        &self.results
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows, always `2^num_vars`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: even a formula without variables has one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Assignment> {
        self.rows.get(index)
    }

    pub fn result(&self, index: usize) -> Option<bool> {
        self.results.get(index).copied()
    }

    /// Iterates over rows with their results, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&Assignment, bool)> + '_ {
        self.rows.iter().zip(self.results.iter().copied())
    }

    /// Indices of the rows that evaluate to true.
    pub fn true_rows(&self) -> Vec<usize> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, &result)| result)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count_true(&self) -> usize {
        self.results.iter().filter(|&&r| r).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.results.iter().all(|&r| r)
    }

    pub fn is_contradiction(&self) -> bool {
        self.results.iter().all(|&r| !r)
    }
}
