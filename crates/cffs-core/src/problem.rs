//! The problem interface consumed by generators and evaluators.

use crate::error::Result;
use crate::expr::Expr;
use crate::record::EvaluationRecord;
use crate::rng::ExperimentRng;
use crate::variable::Variable;

/// A selection problem: a fixed pool of variables plus a transient constraint set.
///
/// The experiment framework never creates or removes variables. It adds
/// constraints for one trial, asks for the solution fraction and the optimum,
/// then clears the constraints before the next trial.
///
/// # Ordering
///
/// [`variables`](Self::variables) must return the pool in the same order on
/// every call, and [`qualities`](Self::qualities) must be index-aligned with
/// it. Random sampling and name-based grouping both rely on this.
pub trait Problem {
    /// The variable pool in stable order.
    fn variables(&self) -> &[Variable];

    /// Qualities index-aligned with [`variables`](Self::variables).
    fn qualities(&self) -> Vec<f64> {
        self.variables().iter().map(Variable::quality).collect()
    }

    /// Adds a constraint to the current set.
    fn add_constraint(&mut self, constraint: Expr) -> Result<()>;

    /// Removes all constraints.
    fn clear_constraints(&mut self);

    /// Number of constraints currently held.
    fn num_constraints(&self) -> usize;

    /// Maximizes the summed quality of selected variables under the current
    /// constraints. The record holds at least `objective_value`.
    fn optimize(&mut self) -> Result<EvaluationRecord>;

    /// Exact fraction of all `2^n` assignments satisfying the constraints.
    fn compute_solution_fraction(&self) -> Result<f64>;

    /// Monte Carlo estimate of the solution fraction from `iterations`
    /// uniformly random assignments drawn from `rng`.
    fn estimate_solution_fraction(&self, iterations: usize, rng: &mut ExperimentRng)
        -> Result<f64>;
}
