//! Constraint experimentation framework for CFFS.
//!
//! Two families of constraint sources run against a [`Problem`]:
//!
//! - [`generator`]: randomized generators that sample variable subsets and
//!   build constraint instances over repeated, seeded trials, plus the
//!   deterministic [`GlobalAtMostGenerator`] sweep
//! - [`evaluator`]: deterministic evaluators deriving structural constraints
//!   from materials-science feature names, composable through
//!   [`CombinedEvaluator`]
//!
//! Each source adds its constraints, measures the solution fraction,
//! optimizes, clears the constraints and reports rows in a [`ResultTable`].
//!
//! # Example
//!
//! ```
//! use cffs_config::{ExperimentConfig, GeneratorConfig, GeneratorKind};
//! use cffs_experiment::Experiment;
//! # use cffs_core::{EvaluationRecord, Expr, ExperimentRng, Problem, Result, Variable};
//! # struct Unconstrained(Vec<Variable>, usize);
//! # impl Problem for Unconstrained {
//! #     fn variables(&self) -> &[Variable] { &self.0 }
//! #     fn add_constraint(&mut self, _: Expr) -> Result<()> { self.1 += 1; Ok(()) }
//! #     fn clear_constraints(&mut self) { self.1 = 0; }
//! #     fn num_constraints(&self) -> usize { self.1 }
//! #     fn optimize(&mut self) -> Result<EvaluationRecord> {
//! #         Ok(EvaluationRecord::new().with("objective_value", 0.0))
//! #     }
//! #     fn compute_solution_fraction(&self) -> Result<f64> { Ok(1.0) }
//! #     fn estimate_solution_fraction(&self, _: usize, _: &mut ExperimentRng) -> Result<f64> { Ok(1.0) }
//! # }
//! # let mut problem = Unconstrained(
//! #     (0..4).map(|i| Variable::new(i, format!("x_{i}"), 1.0)).collect(), 0);
//!
//! let config = ExperimentConfig::new("nand").with_generator(
//!     GeneratorConfig::new(GeneratorKind::Nand).with_num_repetitions(3),
//! );
//! let experiment = Experiment::from_config(&config, &problem).unwrap();
//! let tables = experiment.run(&mut problem).unwrap();
//!
//! assert_eq!(tables.len(), 1);
//! assert_eq!(tables[0].table.len(), 3);
//! ```
//!
//! [`Problem`]: cffs_core::Problem

pub mod builder;
pub mod evaluator;
pub mod generator;
pub mod report;
pub mod result;
pub mod runner;

#[cfg(test)]
mod tests;

pub use evaluator::{CombinedEvaluator, ConstraintEvaluator, ContainerEvaluator, EstimateSettings};
pub use generator::{
    AtLeastGenerator, AtMostGenerator, ConstraintGenerator, GeneratorSettings,
    GlobalAtMostGenerator, IffGenerator, NandGenerator, TrialShape, XorGenerator,
};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{NamedTable, ResultTable};
pub use runner::{Experiment, Source};
