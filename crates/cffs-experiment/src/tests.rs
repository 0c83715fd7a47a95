//! Tests for the experiment runner and reports.

use cffs_config::{EvaluatorConfig, ExperimentConfig, GeneratorConfig, GeneratorKind};
use cffs_core::{CffsError, EvaluationRecord, Problem};
use cffs_solver::SelectionProblem;
use cffs_test::Fixture;

use crate::{CsvExporter, Experiment, MarkdownReport, NamedTable, ResultTable};

fn problem(n: usize) -> SelectionProblem {
    let (names, qualities) = Fixture::numbered(n).into_parts();
    SelectionProblem::new(names, qualities).unwrap()
}

fn config() -> ExperimentConfig {
    ExperimentConfig::new("synthetic")
        .with_generator(
            GeneratorConfig::new(GeneratorKind::AtLeast)
                .with_global_at_most(0.5)
                .with_num_constraints(1.0, 2.0)
                .with_num_repetitions(4),
        )
        .with_generator(GeneratorConfig::new(GeneratorKind::GlobalAtMost))
        .with_evaluator(EvaluatorConfig::GlobalAtMost { global_at_most: 2 })
        .with_evaluator(EvaluatorConfig::QualityThreshold { threshold: 2.0 })
}

#[test]
fn test_from_config_source_order() {
    let problem = problem(5);
    let experiment = Experiment::from_config(&config(), &problem).unwrap();

    let names: Vec<&str> = experiment.sources().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["at_least", "global_at_most", "combined"]);
    assert_eq!(experiment.name(), "synthetic");
}

#[test]
fn test_run() {
    let mut problem = problem(5);
    let experiment = Experiment::from_config(&config(), &problem).unwrap();
    let tables = experiment.run(&mut problem).unwrap();

    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0].source, "at_least");
    assert_eq!(tables[0].table.len(), 4);
    assert_eq!(tables[1].source, "global_at_most");
    assert_eq!(tables[1].table.len(), 5);
    assert_eq!(tables[2].source, "combined");
    assert_eq!(tables[2].table.len(), 1);

    // qualities 5..1: at most two, none below 2.0
    let combined = &tables[2].table.rows()[0];
    assert_eq!(combined.get("objective_value"), Some(9.0));
    assert_eq!(combined.get("num_constraints"), Some(2.0));
    assert_eq!(problem.num_constraints(), 0);
}

#[test]
fn test_run_is_reproducible() {
    let mut problem = problem(6);
    let experiment = Experiment::from_config(&config(), &problem).unwrap();

    let first = experiment.run(&mut problem).unwrap();
    let second = experiment.run(&mut problem).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_from_config_rejects_duplicate_evaluators() {
    let problem = problem(4);
    let config = ExperimentConfig::new("dup")
        .with_evaluator(EvaluatorConfig::SelectAggregate)
        .with_evaluator(EvaluatorConfig::SelectAggregate);

    let err = Experiment::from_config(&config, &problem).unwrap_err();
    assert!(matches!(err, CffsError::DuplicateEvaluator(_)));
}

#[test]
fn test_from_config_normalizes_against_pool() {
    let problem = problem(4);
    let config = ExperimentConfig::new("too_wide").with_generator(
        GeneratorConfig::new(GeneratorKind::Nand).with_num_variables(2.0, 5.0),
    );

    let err = Experiment::from_config(&config, &problem).unwrap_err();
    assert!(matches!(
        err,
        CffsError::CardinalityOutOfRange { value: 5, max: 4 }
    ));
}

#[test]
fn test_csv_missing_cells() {
    let table = ResultTable::from(vec![
        EvaluationRecord::new().with("objective_value", 1.0),
        EvaluationRecord::new()
            .with("objective_value", 2.5)
            .with("cardinality", 3.0),
    ]);
    assert_eq!(
        CsvExporter::to_string(&table),
        "cardinality,objective_value\n,1\n3,2.5\n"
    );

    let mut buffer = Vec::new();
    CsvExporter::write(&table, &mut buffer).unwrap();
    assert_eq!(buffer, CsvExporter::to_string(&table).into_bytes());
}

#[test]
fn test_markdown_report() {
    let mut problem = problem(3);
    let experiment = Experiment::from_config(
        &ExperimentConfig::new("report")
            .with_generator(GeneratorConfig::new(GeneratorKind::GlobalAtMost)),
        &problem,
    )
    .unwrap();
    let tables = experiment.run(&mut problem).unwrap();
    let md = MarkdownReport::to_string(experiment.name(), &tables);

    assert!(md.starts_with("# Experiment: report\n"));
    assert!(md.contains("## global_at_most"));
    assert!(md.contains("- **Rows**: 3"));
    assert!(md.contains("| cardinality | frac_solutions |"));
}

#[test]
fn test_markdown_empty_table() {
    let md = MarkdownReport::to_string("empty", &[NamedTable::new("none", ResultTable::new())]);
    assert!(md.contains("- **Rows**: 0"));
    assert!(!md.contains('|'));
}

#[test]
fn test_markdown_layout() {
    let table = ResultTable::from(vec![
        EvaluationRecord::new()
            .with("objective_value", 2.5)
            .with("num_constraints", 1.0),
        EvaluationRecord::new().with("num_constraints", 3.0),
    ]);
    let md = MarkdownReport::to_string("layout", &[NamedTable::new("nand", table)]);
    assert_eq!(
        md,
        "# Experiment: layout\n\
         \n\
         ## nand\n\
         \n\
         - **Rows**: 2\n\
         \n\
         | num_constraints | objective_value |\n\
         |---|---|\n\
         | 1 | 2.5000 |\n\
         | 3 |  |\n"
    );
}
