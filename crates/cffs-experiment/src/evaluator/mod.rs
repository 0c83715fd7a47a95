//! Deterministic constraint evaluators.
//!
//! An evaluator derives an ordered list of constraints from the variable pool
//! of a [`Problem`], usually from the feature naming convention in
//! [`naming`]. Derivation is pure: no randomness, no state, the same pool
//! always yields the same constraints. The only random part of an evaluation
//! is the Monte Carlo estimate of the solution fraction, which runs on its
//! own seeded stream.

mod aggregate;
mod basic;
mod container;
pub mod naming;
mod quantity;
mod schmid;

#[cfg(test)]
mod tests;

use cffs_core::{seeded_rng, EvaluationRecord, Expr, ExperimentRng, Problem, Result, DEFAULT_SEED};
use tracing::{debug, trace};

pub use cffs_config::DEFAULT_ESTIMATE_ITERATIONS;
pub use aggregate::{
    SelectAggregateEvaluator, SelectAggregateOrOriginalEvaluator, SelectQuantityAggregateEvaluator,
};
pub use basic::{
    CorrelationRemovalEvaluator, GlobalAtMostEvaluator, NoConstraintEvaluator,
    QualityThresholdEvaluator,
};
pub use container::{CombinedEvaluator, ContainerEvaluator};
pub use quantity::{
    SelectDislocationDensityEvaluator, SelectReactionTypeEvaluator, SelectStrainRateEvaluator,
    SelectStrainTensorEvaluator, SelectValueOrDeltaEvaluator,
};
pub use schmid::{
    SelectQuantitySchmidGroupEvaluator, SelectQuantitySchmidGroupRepresentativeEvaluator,
    SelectSchmidGroupEvaluator, SelectSchmidGroupRepresentativeEvaluator,
    SelectWholeSlipSystemsEvaluator,
};

/// Seed and budget of the solution-fraction estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateSettings {
    pub seed: u64,
    pub iterations: usize,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            iterations: DEFAULT_ESTIMATE_ITERATIONS,
        }
    }
}

/// A deterministic source of constraints.
pub trait ConstraintEvaluator {
    /// Short label, matching the evaluator's configuration `type`.
    fn name(&self) -> &'static str;

    /// Derives the constraints for the current variable pool.
    ///
    /// Idempotent: an unchanged pool yields structurally identical lists.
    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>>;

    /// [`evaluate_constraints_with`](Self::evaluate_constraints_with) using
    /// the default seed and iteration budget.
    fn evaluate_constraints(&self, problem: &mut dyn Problem) -> Result<EvaluationRecord> {
        self.evaluate_constraints_with(problem, &EstimateSettings::default())
    }

    /// Adds all constraints, estimates the solution fraction, optimizes and
    /// returns one record with `num_constraints` and `frac_solutions`.
    ///
    /// Constraints are cleared afterwards, also when a step fails.
    fn evaluate_constraints_with(
        &self,
        problem: &mut dyn Problem,
        settings: &EstimateSettings,
    ) -> Result<EvaluationRecord> {
        let mut rng = seeded_rng(settings.seed);
        let outcome = add_and_solve(self, problem, settings.iterations, &mut rng);
        problem.clear_constraints();
        let record = outcome?;
        debug!(
            event = "evaluation_end",
            evaluator = self.name(),
            num_constraints = record.get("num_constraints"),
            frac_solutions = record.get("frac_solutions"),
            objective_value = record.get("objective_value"),
        );
        Ok(record)
    }
}

fn add_and_solve<E: ConstraintEvaluator + ?Sized>(
    evaluator: &E,
    problem: &mut dyn Problem,
    iterations: usize,
    rng: &mut ExperimentRng,
) -> Result<EvaluationRecord> {
    for constraint in evaluator.constraints(&*problem)? {
        trace!(event = "constraint_added", evaluator = evaluator.name(), constraint = %constraint);
        problem.add_constraint(constraint)?;
    }
    let frac_solutions = problem.estimate_solution_fraction(iterations, rng)?;
    let mut record = problem.optimize()?;
    record.insert("num_constraints", problem.num_constraints() as f64);
    record.insert("frac_solutions", frac_solutions);
    Ok(record)
}

// Shared constraint shapes

/// At most `k` of `groups` contain a selected variable.
///
/// Empty groups are left out. `None` if no group is left.
fn at_most_groups(groups: Vec<Vec<Expr>>, k: usize) -> Result<Option<Expr>> {
    let operands: Vec<Expr> = groups
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(Expr::or)
        .collect();
    if operands.is_empty() {
        return Ok(None);
    }
    Expr::at_most(operands, k).map(Some)
}

/// Variables from `left` and from `right` are never selected together.
fn not_both(left: Vec<Expr>, right: Vec<Expr>) -> Expr {
    Expr::not(Expr::and([Expr::or(left), Expr::or(right)]))
}

/// Quantities that have a slip-system-1 feature (`<q>_1`), in pool order.
fn base_quantities(problem: &dyn Problem) -> Vec<&str> {
    problem
        .variables()
        .iter()
        .filter_map(|variable| naming::FeatureName::parse(variable.name()).base_of_first_slip_system())
        .collect()
}

/// Leaf expressions of all variables whose parsed name satisfies `keep`.
fn select<F>(problem: &dyn Problem, keep: F) -> Vec<Expr>
where
    F: Fn(&naming::FeatureName<'_>) -> bool,
{
    problem
        .variables()
        .iter()
        .filter(|variable| keep(&naming::FeatureName::parse(variable.name())))
        .map(|variable| variable.expr())
        .collect()
}
