//! Randomized constraint generators.
//!
//! A generator only decides *what* constraint to build from a sampled set of
//! variables ([`ConstraintGenerator::generate`]). The shared trial driver
//! ([`ConstraintGenerator::evaluate_constraints`]) does the rest:
//!
//! 1. Reseed one random stream from the configured seed. All trials of the
//!    call continue this stream.
//! 2. Per trial, draw the number of constraints, then per constraint draw a
//!    variable count and sample that many distinct variables from the full
//!    pool, build the constraint and add it to the problem.
//! 3. Compute the exact solution fraction, optimize, and record a row with
//!    `num_constraints` and `frac_solutions`.
//! 4. Clear the constraints before the next trial.

mod at_least;
mod at_most;
mod global_at_most;
mod iff;
mod nand;
mod xor;


use std::ops::RangeInclusive;

use cffs_core::{
    seeded_rng, Cardinality, CffsError, EvaluationRecord, Expr, ExperimentRng, Problem, Result,
    Variable, DEFAULT_SEED,
};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::result::ResultTable;

pub use at_least::AtLeastGenerator;
pub use at_most::AtMostGenerator;
pub use global_at_most::GlobalAtMostGenerator;
pub use iff::IffGenerator;
pub use nand::NandGenerator;
pub use xor::XorGenerator;

/// Trial parameters as given, possibly relative to the variable pool.
///
/// # Example
///
/// ```
/// use cffs_experiment::GeneratorSettings;
///
/// let shape = GeneratorSettings::default()
///     .with_num_constraints(1usize, 3usize)
///     .with_num_variables(2usize, 0.5)
///     .with_num_repetitions(10)
///     .normalize(10)
///     .unwrap();
///
/// assert_eq!(shape.constraints, 1..=3);
/// assert_eq!(shape.variables, 2..=5);
/// assert_eq!(shape.repetitions, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub min_num_constraints: Cardinality,
    pub max_num_constraints: Cardinality,
    pub min_num_variables: Cardinality,
    pub max_num_variables: Cardinality,
    pub num_repetitions: usize,
    pub seed: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_num_constraints: Cardinality::Absolute(1),
            max_num_constraints: Cardinality::Absolute(1),
            min_num_variables: Cardinality::Absolute(2),
            max_num_variables: Cardinality::Absolute(2),
            num_repetitions: 1,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorSettings {
    pub fn with_num_constraints(
        mut self,
        min: impl Into<Cardinality>,
        max: impl Into<Cardinality>,
    ) -> Self {
        self.min_num_constraints = min.into();
        self.max_num_constraints = max.into();
        self
    }

    pub fn with_num_variables(
        mut self,
        min: impl Into<Cardinality>,
        max: impl Into<Cardinality>,
    ) -> Self {
        self.min_num_variables = min.into();
        self.max_num_variables = max.into();
        self
    }

    pub fn with_num_repetitions(mut self, num_repetitions: usize) -> Self {
        self.num_repetitions = num_repetitions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Resolves every bound against a pool of `pool_size` variables.
    ///
    /// # Errors
    ///
    /// [`CffsError::CardinalityOutOfRange`] if a bound falls outside
    /// `[1, pool_size]` or a minimum exceeds its maximum.
    pub fn normalize(&self, pool_size: usize) -> Result<TrialShape> {
        Ok(TrialShape {
            constraints: bounds(
                self.min_num_constraints,
                self.max_num_constraints,
                pool_size,
            )?,
            variables: bounds(self.min_num_variables, self.max_num_variables, pool_size)?,
            repetitions: self.num_repetitions,
            seed: self.seed,
        })
    }
}

fn bounds(min: Cardinality, max: Cardinality, pool_size: usize) -> Result<RangeInclusive<usize>> {
    let min = min.resolve(pool_size)?;
    let max = max.resolve(pool_size)?;
    if min > max {
        return Err(CffsError::CardinalityOutOfRange {
            value: min as i64,
            max,
        });
    }
    Ok(min..=max)
}

/// Normalized trial parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialShape {
    /// Range the per-trial constraint count is drawn from.
    pub constraints: RangeInclusive<usize>,
    /// Range the per-constraint variable count is drawn from.
    pub variables: RangeInclusive<usize>,
    pub repetitions: usize,
    pub seed: u64,
}

/// A randomized constraint generation policy.
pub trait ConstraintGenerator {
    /// Short label used in logs and result tables.
    fn name(&self) -> &'static str;

    fn shape(&self) -> &TrialShape;

    /// Builds one constraint over `variables`.
    ///
    /// Reads but never modifies `problem`. Policies that need a random
    /// cardinality draw it from `rng`, the stream of the running trial.
    fn generate(
        &self,
        problem: &dyn Problem,
        variables: &[Variable],
        rng: &mut ExperimentRng,
    ) -> Result<Expr>;

    /// Runs all trials against `problem` and returns one row per trial.
    ///
    /// `problem` should hold no constraints when called: policies that
    /// conjoin a global bound do so only while the constraint set is empty.
    fn evaluate_constraints(&self, problem: &mut dyn Problem) -> Result<ResultTable> {
        run_trials(self, problem)
    }
}

pub(crate) fn run_trials<G: ConstraintGenerator + ?Sized>(
    generator: &G,
    problem: &mut dyn Problem,
) -> Result<ResultTable> {
    let shape = generator.shape();
    if problem.num_constraints() > 0 {
        warn!(
            event = "non_empty_problem",
            generator = generator.name(),
            num_constraints = problem.num_constraints(),
        );
    }

    let mut rng = seeded_rng(shape.seed);
    let mut table = ResultTable::new();
    for trial in 0..shape.repetitions {
        let outcome = run_trial(generator, problem, &mut rng);
        problem.clear_constraints();
        let record = outcome?;
        debug!(
            event = "trial_end",
            generator = generator.name(),
            trial,
            num_constraints = record.get("num_constraints"),
            frac_solutions = record.get("frac_solutions"),
            objective_value = record.get("objective_value"),
        );
        table.push(record);
    }
    Ok(table)
}

fn run_trial<G: ConstraintGenerator + ?Sized>(
    generator: &G,
    problem: &mut dyn Problem,
    rng: &mut ExperimentRng,
) -> Result<EvaluationRecord> {
    let shape = generator.shape();
    let num_constraints = rng.random_range(shape.constraints.clone());
    for _ in 0..num_constraints {
        let num_variables = rng.random_range(shape.variables.clone());
        let selected: Vec<Variable> = problem
            .variables()
            .choose_multiple(rng, num_variables)
            .cloned()
            .collect();
        let constraint = generator.generate(&*problem, &selected, rng)?;
        trace!(event = "constraint_added", constraint = %constraint);
        problem.add_constraint(constraint)?;
    }

    let frac_solutions = problem.compute_solution_fraction()?;
    let mut record = problem.optimize()?;
    record.insert("num_constraints", num_constraints as f64);
    record.insert("frac_solutions", frac_solutions);
    Ok(record)
}

/// Cardinality for policies left without a fixed one: uniform in
/// `[1, len - 1]`, so the constraint neither forbids nor forces everything.
fn random_cardinality(len: usize, rng: &mut ExperimentRng) -> Result<usize> {
    if len < 2 {
        return Err(CffsError::InvalidSample {
            expected: 2,
            actual: len,
        });
    }
    Ok(rng.random_range(1..len))
}

/// Conjoins "at most `global_at_most` of all variables" while the problem
/// has no constraints yet, i.e. for the first constraint of a trial.
/// Without it, selecting every variable trivially satisfies at-least and
/// biconditional constraints.
fn with_global_bound(problem: &dyn Problem, global_at_most: usize, constraint: Expr) -> Expr {
    if problem.num_constraints() == 0 {
        Expr::and([
            Expr::count_at_most(problem.variables(), global_at_most),
            constraint,
        ])
    } else {
        constraint
    }
}
