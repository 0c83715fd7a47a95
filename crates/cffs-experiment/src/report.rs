//! Report generation for result tables.

use std::io::{self, Write};

use crate::result::{NamedTable, ResultTable};

/// CSV exporter for result tables.
///
/// Columns are the sorted union of row keys; missing fields are empty cells.
///
/// # Example
///
/// ```
/// use cffs_core::EvaluationRecord;
/// use cffs_experiment::{CsvExporter, ResultTable};
///
/// let table = ResultTable::from(vec![
///     EvaluationRecord::new().with("objective_value", 3.5).with("num_constraints", 2.0),
/// ]);
/// let csv = CsvExporter::to_string(&table);
/// assert_eq!(csv, "num_constraints,objective_value\n2,3.5\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    pub fn to_string(table: &ResultTable) -> String {
        let columns = table.columns();
        let mut output = columns.join(",");
        output.push('\n');
        for row in table {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| row.get(column).map(|value| value.to_string()).unwrap_or_default())
                .collect();
            output.push_str(&cells.join(","));
            output.push('\n');
        }
        output
    }

    /// Writes the table as CSV to a writer.
    pub fn write<W: Write>(table: &ResultTable, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(table).as_bytes())
    }
}

/// Markdown report generator.
///
/// One section per source with its row count and a table of all rows.
///
/// # Example
///
/// ```
/// use cffs_core::EvaluationRecord;
/// use cffs_experiment::{MarkdownReport, NamedTable, ResultTable};
///
/// let table = ResultTable::from(vec![EvaluationRecord::new().with("objective_value", 1.0)]);
/// let md = MarkdownReport::to_string("demo", &[NamedTable::new("nand", table)]);
/// assert!(md.contains("# Experiment: demo"));
/// assert!(md.contains("## nand"));
/// assert!(md.contains("| objective_value |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn to_string(name: &str, tables: &[NamedTable]) -> String {
        let mut output = format!("# Experiment: {name}\n");

        for named in tables {
            output.push_str(&format!("\n## {}\n\n", named.source));
            output.push_str(&format!("- **Rows**: {}\n", named.table.len()));

            let columns = named.table.columns();
            if columns.is_empty() {
                continue;
            }
            output.push_str(&format!("\n| {} |\n", columns.join(" | ")));
            output.push_str(&format!("|{}\n", "---|".repeat(columns.len())));
            for row in &named.table {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|column| row.get(column).map(format_value).unwrap_or_default())
                    .collect();
                output.push_str(&format!("| {} |\n", cells.join(" | ")));
            }
        }

        output
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}
