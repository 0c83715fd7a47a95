//! Experiment runner.

use cffs_config::ExperimentConfig;
use cffs_core::{Problem, Result};
use tracing::info;

use crate::builder::build_generator;
use crate::evaluator::{CombinedEvaluator, ConstraintEvaluator, EstimateSettings};
use crate::generator::{ConstraintGenerator, GlobalAtMostGenerator};
use crate::result::{NamedTable, ResultTable};

/// One source of result rows.
pub enum Source {
    /// Randomized generator, one row per trial.
    Generator(Box<dyn ConstraintGenerator>),
    /// Global cardinality sweep, one row per cardinality.
    Sweep(GlobalAtMostGenerator),
    /// Evaluator, one row.
    Evaluator(Box<dyn ConstraintEvaluator>),
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Generator(generator) => generator.name(),
            Source::Sweep(_) => "global_at_most",
            Source::Evaluator(evaluator) => evaluator.name(),
        }
    }

    /// Runs the source against `problem`. `estimate` only applies to
    /// evaluators.
    pub fn evaluate(
        &self,
        problem: &mut dyn Problem,
        estimate: &EstimateSettings,
    ) -> Result<ResultTable> {
        match self {
            Source::Generator(generator) => generator.evaluate_constraints(problem),
            Source::Sweep(sweep) => sweep.evaluate_constraints(problem),
            Source::Evaluator(evaluator) => {
                let record = evaluator.evaluate_constraints_with(problem, estimate)?;
                Ok(ResultTable::from(vec![record]))
            }
        }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Source").field(&self.name()).finish()
    }
}

/// A batch of sources run one after another against the same problem.
///
/// Sources never overlap: each one adds, solves and clears its constraints
/// before the next starts.
#[derive(Debug)]
pub struct Experiment {
    name: String,
    sources: Vec<Source>,
    estimate: EstimateSettings,
}

impl Experiment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            estimate: EstimateSettings::default(),
        }
    }

    /// Builds every configured generator, in order, followed by one combined
    /// evaluator if any evaluators are configured.
    pub fn from_config(config: &ExperimentConfig, problem: &dyn Problem) -> Result<Self> {
        let mut experiment = Self::new(&config.name);
        experiment.estimate.iterations = config.solver.estimate_iterations;
        for generator in &config.generators {
            experiment.sources.push(build_generator(problem, generator)?);
        }
        if !config.evaluators.is_empty() {
            let combined = CombinedEvaluator::from_config(problem, &config.evaluators)?;
            experiment
                .sources
                .push(Source::Evaluator(Box::new(combined)));
        }
        Ok(experiment)
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_estimate_settings(mut self, estimate: EstimateSettings) -> Self {
        self.estimate = estimate;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Runs all sources and returns their tables in source order.
    pub fn run(&self, problem: &mut dyn Problem) -> Result<Vec<NamedTable>> {
        info!(
            event = "experiment_start",
            experiment = %self.name,
            sources = self.sources.len(),
            num_variables = problem.variables().len(),
        );

        let mut tables = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let table = source.evaluate(problem, &self.estimate)?;
            info!(
                event = "source_end",
                experiment = %self.name,
                source = source.name(),
                rows = table.len(),
            );
            tables.push(NamedTable::new(source.name(), table));
        }

        info!(
            event = "experiment_end",
            experiment = %self.name,
            tables = tables.len(),
        );
        Ok(tables)
    }
}
