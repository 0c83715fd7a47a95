//! CFFS - Constrained Feature Selection experiments in Rust
//!
//! Measure how boolean and cardinality constraints over a pool of features
//! change the solution space and the quality-maximizing selection.
//!
//! # Example
//!
//! ```rust
//! use cffs::prelude::*;
//!
//! let mut problem = SelectionProblem::new(
//!     ["rho_1", "rho_2", "rho_mean"],
//!     vec![3.0, 2.0, 1.0],
//! )
//! .unwrap();
//!
//! let record = SelectAggregateOrOriginalEvaluator
//!     .evaluate_constraints(&mut problem)
//!     .unwrap();
//! assert_eq!(record.get("objective_value"), Some(5.0));
//! ```

// Core types
pub use cffs_core::{
    seeded_rng, Cardinality, CffsError, EvaluationRecord, ExperimentRng, Expr, Problem, Result,
    Variable, DEFAULT_SEED,
};

// Reference solver
pub use cffs_solver::{SearchConfig, SelectionProblem};

// Configuration
pub use cffs_config::{
    ConfigError, EvaluatorConfig, ExperimentConfig, GeneratorConfig, GeneratorKind, SolverConfig,
};

// Experiment framework
pub use cffs_experiment::{evaluator, generator};
pub use cffs_experiment::{
    CombinedEvaluator, ConstraintEvaluator, ConstraintGenerator, ContainerEvaluator, CsvExporter,
    EstimateSettings, Experiment, GeneratorSettings, GlobalAtMostGenerator, MarkdownReport,
    NamedTable, ResultTable,
};

#[cfg(feature = "console")]
pub mod console;

mod run;
pub use run::{run_experiment, selection_problem};

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::evaluator::{
        CorrelationRemovalEvaluator, GlobalAtMostEvaluator, NoConstraintEvaluator,
        QualityThresholdEvaluator, SelectAggregateEvaluator, SelectAggregateOrOriginalEvaluator,
        SelectDislocationDensityEvaluator, SelectQuantityAggregateEvaluator,
        SelectQuantitySchmidGroupEvaluator, SelectQuantitySchmidGroupRepresentativeEvaluator,
        SelectReactionTypeEvaluator, SelectSchmidGroupEvaluator,
        SelectSchmidGroupRepresentativeEvaluator, SelectStrainRateEvaluator,
        SelectStrainTensorEvaluator, SelectValueOrDeltaEvaluator, SelectWholeSlipSystemsEvaluator,
    };
    pub use super::generator::{
        AtLeastGenerator, AtMostGenerator, IffGenerator, NandGenerator, XorGenerator,
    };
    pub use super::{
        Cardinality, CombinedEvaluator, ConstraintEvaluator, ConstraintGenerator, Experiment,
        ExperimentConfig, Expr, GeneratorSettings, GlobalAtMostGenerator, Problem, ResultTable,
        SelectionProblem,
    };
}
