//! Slip-system and Schmid-group evaluators.

use cffs_core::{Expr, Problem, Result};

use super::naming::{FeatureName, NUM_SLIP_SYSTEMS, SCHMID_GROUPS_100};
use super::{at_most_groups, base_quantities, select, ConstraintEvaluator};

fn in_group(name: &FeatureName<'_>, group: &[u32]) -> bool {
    name.slip_system().is_some_and(|system| group.contains(&system))
}

/// Features from at most one Schmid group overall.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectSchmidGroupEvaluator;

impl ConstraintEvaluator for SelectSchmidGroupEvaluator {
    fn name(&self) -> &'static str {
        "select_schmid_group"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let groups = SCHMID_GROUPS_100
            .iter()
            .map(|group| select(problem, |name| in_group(name, group)))
            .collect();
        Ok(at_most_groups(groups, 1)?.into_iter().collect())
    }
}

/// Per quantity, features from at most one Schmid group.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectQuantitySchmidGroupEvaluator;

impl ConstraintEvaluator for SelectQuantitySchmidGroupEvaluator {
    fn name(&self) -> &'static str {
        "select_quantity_schmid_group"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let mut constraints = Vec::new();
        for quantity in base_quantities(problem) {
            let groups = SCHMID_GROUPS_100
                .iter()
                .map(|group| {
                    select(problem, |name| {
                        name.quantity() == quantity && in_group(name, group)
                    })
                })
                .collect();
            constraints.extend(at_most_groups(groups, 1)?);
        }
        Ok(constraints)
    }
}

/// At most one feature from each Schmid group.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectSchmidGroupRepresentativeEvaluator;

impl ConstraintEvaluator for SelectSchmidGroupRepresentativeEvaluator {
    fn name(&self) -> &'static str {
        "select_schmid_group_representative"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        SCHMID_GROUPS_100
            .iter()
            .map(|group| select(problem, |name| in_group(name, group)))
            .filter(|members| !members.is_empty())
            .map(|members| Expr::at_most(members, 1))
            .collect()
    }
}

/// Per quantity, at most one feature from each Schmid group.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectQuantitySchmidGroupRepresentativeEvaluator;

impl ConstraintEvaluator for SelectQuantitySchmidGroupRepresentativeEvaluator {
    fn name(&self) -> &'static str {
        "select_quantity_schmid_group_representative"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let mut constraints = Vec::new();
        for quantity in base_quantities(problem) {
            for group in SCHMID_GROUPS_100 {
                let members = select(problem, |name| {
                    name.quantity() == quantity && in_group(name, group)
                });
                if !members.is_empty() {
                    constraints.push(Expr::at_most(members, 1)?);
                }
            }
        }
        Ok(constraints)
    }
}

/// Per slip system, all its features are selected together or none.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectWholeSlipSystemsEvaluator;

impl ConstraintEvaluator for SelectWholeSlipSystemsEvaluator {
    fn name(&self) -> &'static str {
        "select_whole_slip_systems"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        Ok((1..=NUM_SLIP_SYSTEMS)
            .map(|system| select(problem, |name| name.slip_system() == Some(system)))
            .filter(|members| !members.is_empty())
            .map(Expr::iff)
            .collect())
    }
}
