//! End-to-end tests: configuration in, result tables out.

use cffs_test::{ms, Fixture};

use crate::prelude::*;
use crate::{run_experiment, CsvExporter, MarkdownReport};

const CONFIG: &str = r#"
name: ms
solver:
  estimate_iterations: 2000
generators:
  - type: iff
    global_at_most: 0.5
    max_num_constraints: 2
    num_repetitions: 3
  - type: xor
    num_repetitions: 2
evaluators:
  - type: select_aggregate_or_original
  - type: select_value_or_delta
  - type: select_strain_rate
  - type: global_at_most
    global_at_most: 3
"#;

fn ms_problem() -> SelectionProblem {
    let mut names = ms::slip_system_names("rho");
    names.truncate(3);
    names.extend(ms::aggregate_names("rho", &["mean"]));
    names.extend(["gamma_1", "gamma_abs_mean", "eps_xx", "delta_eps_xx"].map(String::from));
    let (names, qualities) = Fixture::from_names(names).into_parts();
    SelectionProblem::new(names, qualities).unwrap()
}

#[test]
fn test_yaml_config_end_to_end() {
    let config = ExperimentConfig::from_yaml_str(CONFIG).unwrap();
    let mut problem = ms_problem();

    let tables = run_experiment(&config, &mut problem).unwrap();

    let sources: Vec<&str> = tables.iter().map(|t| t.source.as_str()).collect();
    assert_eq!(sources, vec!["iff", "xor", "combined"]);
    assert_eq!(tables[0].table.len(), 3);
    assert_eq!(tables[1].table.len(), 2);

    // rho_1..3 (8, 7, 6) excludes rho_mean; eps_xx or its delta; at most 3
    let combined = &tables[2].table.rows()[0];
    assert_eq!(combined.get("num_constraints"), Some(5.0));
    assert_eq!(combined.get("objective_value"), Some(21.0));
    assert_eq!(problem.num_constraints(), 0);

    let md = MarkdownReport::to_string(&config.name, &tables);
    assert!(md.contains("## combined"));
    let csv = CsvExporter::to_string(&tables[0].table);
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_same_config_same_tables() {
    let config = ExperimentConfig::from_yaml_str(CONFIG).unwrap();
    let mut problem = ms_problem();

    let first = run_experiment(&config, &mut problem).unwrap();
    let second = run_experiment(&config, &mut problem).unwrap();
    assert_eq!(first, second);
}
