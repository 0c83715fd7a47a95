//! Aggregate-function evaluators.

use cffs_core::{Expr, Problem, Result};

use super::naming::AGGREGATES;
use super::{at_most_groups, base_quantities, not_both, select, ConstraintEvaluator};

/// At most one aggregate function across all quantities.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAggregateEvaluator;

impl ConstraintEvaluator for SelectAggregateEvaluator {
    fn name(&self) -> &'static str {
        "select_aggregate"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let groups = AGGREGATES
            .into_iter()
            .map(|aggregate| select(problem, |name| name.aggregate() == Some(aggregate)))
            .collect();
        Ok(at_most_groups(groups, 1)?.into_iter().collect())
    }
}

/// Per quantity, at most one aggregate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectQuantityAggregateEvaluator;

impl ConstraintEvaluator for SelectQuantityAggregateEvaluator {
    fn name(&self) -> &'static str {
        "select_quantity_aggregate"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let mut constraints = Vec::new();
        for quantity in base_quantities(problem) {
            let aggregates = select(problem, |name| {
                name.quantity() == quantity && name.aggregate().is_some()
            });
            if !aggregates.is_empty() {
                constraints.push(Expr::at_most(aggregates, 1)?);
            }
        }
        Ok(constraints)
    }
}

/// Per quantity, aggregates and per-slip-system originals are never
/// selected together.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAggregateOrOriginalEvaluator;

impl ConstraintEvaluator for SelectAggregateOrOriginalEvaluator {
    fn name(&self) -> &'static str {
        "select_aggregate_or_original"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        Ok(base_quantities(problem)
            .into_iter()
            .map(|quantity| {
                let originals =
                    select(problem, |name| name.quantity() == quantity && name.is_original());
                let aggregates = select(problem, |name| {
                    name.quantity() == quantity && name.aggregate().is_some()
                });
                not_both(originals, aggregates)
            })
            .collect())
    }
}
