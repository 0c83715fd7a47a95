//! Solution counting over selection assignments.

use cffs_core::{CffsError, Expr, ExperimentRng, Result};
use rand::Rng;

/// Status of a conjunction of constraints under a partial assignment.
///
/// `Some(false)` as soon as one constraint is violated, `Some(true)` once all
/// are satisfied regardless of unassigned variables, `None` otherwise.
pub fn conjunction_status(constraints: &[Expr], assignment: &[Option<bool>]) -> Option<bool> {
    let mut undecided = false;
    for constraint in constraints {
        match constraint.evaluate_partial(assignment) {
            Some(false) => return Some(false),
            Some(true) => {}
            None => undecided = true,
        }
    }
    if undecided {
        None
    } else {
        Some(true)
    }
}

/// Ids of the variables referenced by any constraint, ascending.
pub fn referenced_variables(constraints: &[Expr], num_variables: usize) -> Vec<usize> {
    let mut referenced = vec![false; num_variables];
    for constraint in constraints {
        mark_referenced(constraint, &mut referenced);
    }
    referenced
        .iter()
        .enumerate()
        .filter_map(|(id, used)| used.then_some(id))
        .collect()
}

fn mark_referenced(expr: &Expr, referenced: &mut [bool]) {
    match expr {
        Expr::Var(id) => {
            if let Some(slot) = referenced.get_mut(*id) {
                *slot = true;
            }
        }
        Expr::Not(inner) => mark_referenced(inner, referenced),
        Expr::Xor(left, right) => {
            mark_referenced(left, referenced);
            mark_referenced(right, referenced);
        }
        Expr::And(operands)
        | Expr::Or(operands)
        | Expr::Iff(operands)
        | Expr::AtMost { operands, .. }
        | Expr::WeightedSumGe { operands, .. }
        | Expr::WeightedSumLe { operands, .. } => {
            for op in operands {
                mark_referenced(op, referenced);
            }
        }
    }
}

/// Exact fraction of the `2^num_variables` assignments satisfying all constraints.
///
/// Only variables referenced by some constraint are branched on; a subtree
/// whose constraints are decided at depth `d` contributes `2^-d` at once.
pub fn exact_fraction(constraints: &[Expr], num_variables: usize) -> f64 {
    let order = referenced_variables(constraints, num_variables);
    let mut assignment = vec![None; num_variables];
    count_subtree(constraints, &order, &mut assignment, 0, 1.0)
}

fn count_subtree(
    constraints: &[Expr],
    order: &[usize],
    assignment: &mut [Option<bool>],
    depth: usize,
    weight: f64,
) -> f64 {
    match conjunction_status(constraints, assignment) {
        Some(false) => 0.0,
        Some(true) => weight,
        None => {
            // A complete assignment of the referenced variables decides every constraint.
            let Some(&id) = order.get(depth) else {
                return 0.0;
            };
            assignment[id] = Some(true);
            let selected = count_subtree(constraints, order, assignment, depth + 1, weight / 2.0);
            assignment[id] = Some(false);
            let unselected =
                count_subtree(constraints, order, assignment, depth + 1, weight / 2.0);
            assignment[id] = None;
            selected + unselected
        }
    }
}

/// Fraction of `iterations` uniformly random assignments satisfying all constraints.
///
/// # Errors
///
/// [`CffsError::Solver`] if `iterations` is zero.
pub fn estimate_fraction(
    constraints: &[Expr],
    num_variables: usize,
    iterations: usize,
    rng: &mut ExperimentRng,
) -> Result<f64> {
    if iterations == 0 {
        return Err(CffsError::Solver(
            "solution fraction estimate needs at least one iteration".to_string(),
        ));
    }
    let mut assignment = vec![false; num_variables];
    let mut satisfied = 0usize;
    for _ in 0..iterations {
        for slot in assignment.iter_mut() {
            *slot = rng.random_bool(0.5);
        }
        if constraints.iter().all(|c| c.evaluate(&assignment)) {
            satisfied += 1;
        }
    }
    Ok(satisfied as f64 / iterations as f64)
}
