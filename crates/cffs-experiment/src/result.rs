//! Experiment result tables.

use std::collections::BTreeSet;

use cffs_core::EvaluationRecord;

/// Ordered rows of evaluation records.
///
/// Generators produce one row per trial, evaluators a single row. Rows keep
/// insertion order; columns are the sorted union of all row keys, so rows
/// missing a field render as empty cells.
///
/// # Example
///
/// ```
/// use cffs_core::EvaluationRecord;
/// use cffs_experiment::ResultTable;
///
/// let mut table = ResultTable::new();
/// table.push(EvaluationRecord::new().with("objective_value", 3.0));
/// table.push(EvaluationRecord::new().with("objective_value", 5.0).with("cardinality", 2.0));
///
/// assert_eq!(table.columns(), vec!["cardinality", "objective_value"]);
/// assert_eq!(table.column("objective_value"), vec![Some(3.0), Some(5.0)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<EvaluationRecord>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: EvaluationRecord) {
        self.rows.push(row);
    }

    /// Appends all rows of `other`, keeping their order.
    pub fn append(&mut self, other: ResultTable) {
        self.rows.extend(other.rows);
    }

    pub fn rows(&self) -> &[EvaluationRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted union of the keys of all rows.
    pub fn columns(&self) -> Vec<&str> {
        let columns: BTreeSet<&str> = self.rows.iter().flat_map(EvaluationRecord::keys).collect();
        columns.into_iter().collect()
    }

    /// Values of one column, `None` where a row lacks the field.
    pub fn column(&self, name: &str) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.get(name)).collect()
    }

    /// Sets `key` to `value` on every row.
    pub fn annotate(&mut self, key: &str, value: f64) {
        for row in &mut self.rows {
            row.insert(key, value);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvaluationRecord> {
        self.rows.iter()
    }
}

impl From<Vec<EvaluationRecord>> for ResultTable {
    fn from(rows: Vec<EvaluationRecord>) -> Self {
        Self { rows }
    }
}

impl FromIterator<EvaluationRecord> for ResultTable {
    fn from_iter<I: IntoIterator<Item = EvaluationRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<EvaluationRecord> for ResultTable {
    fn extend<I: IntoIterator<Item = EvaluationRecord>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl IntoIterator for ResultTable {
    type Item = EvaluationRecord;
    type IntoIter = std::vec::IntoIter<EvaluationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a EvaluationRecord;
    type IntoIter = std::slice::Iter<'a, EvaluationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A result table labelled with the source that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTable {
    /// Source label, e.g. `at_least` or `combined`.
    pub source: String,
    pub table: ResultTable,
}

impl NamedTable {
    pub fn new(source: impl Into<String>, table: ResultTable) -> Self {
        Self {
            source: source.into(),
            table,
        }
    }
}
