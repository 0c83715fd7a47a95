//! One-call experiment entry point.

use cffs_config::{ExperimentConfig, SolverConfig};
use cffs_core::{Problem, Result};
use cffs_experiment::{Experiment, NamedTable};
use cffs_solver::{SearchConfig, SelectionProblem};

/// Builds the experiment described by `config` and runs it on `problem`.
///
/// With the `console` feature, console logging is initialized first.
///
/// # Example
///
/// ```
/// use cffs::{run_experiment, ExperimentConfig, GeneratorConfig, GeneratorKind, SelectionProblem};
///
/// let mut problem = SelectionProblem::new(["a", "b", "c"], vec![1.0, 2.0, 3.0]).unwrap();
/// let config = ExperimentConfig::new("sweep")
///     .with_generator(GeneratorConfig::new(GeneratorKind::GlobalAtMost));
///
/// let tables = run_experiment(&config, &mut problem).unwrap();
/// assert_eq!(tables[0].table.len(), 3);
/// ```
pub fn run_experiment(
    config: &ExperimentConfig,
    problem: &mut dyn Problem,
) -> Result<Vec<NamedTable>> {
    #[cfg(feature = "console")]
    crate::console::init();

    let experiment = Experiment::from_config(config, &*problem)?;
    experiment.run(problem)
}

/// Creates a [`SelectionProblem`] with the search limits of `config`.
///
/// # Example
///
/// ```
/// use cffs::{selection_problem, SolverConfig};
/// use cffs::prelude::*;
///
/// let config = SolverConfig { node_limit: Some(1_000), ..SolverConfig::default() };
/// let problem = selection_problem(["a", "b"], vec![1.0, 2.0], &config).unwrap();
/// assert_eq!(problem.variables().len(), 2);
/// ```
pub fn selection_problem<I, S>(
    names: I,
    qualities: Vec<f64>,
    config: &SolverConfig,
) -> Result<SelectionProblem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let search = SearchConfig {
        node_limit: config.node_limit,
    };
    Ok(SelectionProblem::new(names, qualities)?.with_search_config(search))
}
