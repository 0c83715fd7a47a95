//! Boolean expression trees for selection constraints.
//!
//! Leaves are variables ("selected" / "not selected"); inner nodes are the
//! logical connectives and cardinality primitives the experiment framework
//! builds constraints from. Expressions are immutable once built and are
//! handed to a [`Problem`](crate::Problem) by value.

use std::fmt;

use crate::error::{CffsError, Result};
use crate::variable::Variable;

/// A constraint expression over selection variables.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Variable with the given pool index is selected.
    Var(usize),
    Not(Box<Expr>),
    /// True iff all operands are true. Empty conjunction is true.
    And(Vec<Expr>),
    /// True iff any operand is true. Empty disjunction is false.
    Or(Vec<Expr>),
    /// True iff all operands have the same value.
    Iff(Vec<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    /// At most `k` operands are true.
    AtMost { operands: Vec<Expr>, k: usize },
    /// Sum of weights of true operands is at least `bound`.
    WeightedSumGe {
        operands: Vec<Expr>,
        weights: Vec<f64>,
        bound: f64,
    },
    /// Sum of weights of true operands is at most `bound`.
    WeightedSumLe {
        operands: Vec<Expr>,
        weights: Vec<f64>,
        bound: f64,
    },
}

impl Expr {
    // Constructors

    /// Leaf expressions for a slice of variables, in order.
    pub fn vars(variables: &[Variable]) -> Vec<Expr> {
        variables.iter().map(Variable::expr).collect()
    }

    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(operands.into_iter().collect())
    }

    pub fn iff(operands: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Iff(operands.into_iter().collect())
    }

    pub fn xor(left: Expr, right: Expr) -> Self {
        Expr::Xor(Box::new(left), Box::new(right))
    }

    /// At most `k` of `operands` may be true.
    ///
    /// # Errors
    ///
    /// Returns [`CffsError::EmptyOperands`] if `operands` is empty; callers
    /// that derive operand groups must skip empty groups.
    pub fn at_most(operands: Vec<Expr>, k: usize) -> Result<Self> {
        if operands.is_empty() {
            return Err(CffsError::EmptyOperands("AtMost"));
        }
        Ok(Expr::AtMost { operands, k })
    }

    /// Weighted sum of true operands is at least `bound`.
    pub fn weighted_sum_ge(operands: Vec<Expr>, weights: Vec<f64>, bound: f64) -> Result<Self> {
        check_weights(&operands, &weights)?;
        Ok(Expr::WeightedSumGe {
            operands,
            weights,
            bound,
        })
    }

    /// Weighted sum of true operands is at most `bound`.
    pub fn weighted_sum_le(operands: Vec<Expr>, weights: Vec<f64>, bound: f64) -> Result<Self> {
        check_weights(&operands, &weights)?;
        Ok(Expr::WeightedSumLe {
            operands,
            weights,
            bound,
        })
    }

    /// At least `k` of the variables are selected (unit weights).
    pub fn count_at_least(variables: &[Variable], k: usize) -> Self {
        Expr::WeightedSumGe {
            operands: Expr::vars(variables),
            weights: vec![1.0; variables.len()],
            bound: k as f64,
        }
    }

    /// At most `k` of the variables are selected (unit weights).
    pub fn count_at_most(variables: &[Variable], k: usize) -> Self {
        Expr::WeightedSumLe {
            operands: Expr::vars(variables),
            weights: vec![1.0; variables.len()],
            bound: k as f64,
        }
    }

    // Evaluation

    /// Evaluates the expression under a complete assignment.
    ///
    /// `assignment[i]` is the selection state of the variable with id `i`.
    /// Ids outside the assignment are treated as unselected.
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        self.evaluate_with(&|id| Some(assignment.get(id).copied().unwrap_or(false)))
            .unwrap_or(false)
    }

    /// Three-valued evaluation under a partial assignment.
    ///
    /// Returns `Some(value)` when every completion of the assignment gives the
    /// same value, `None` when the outcome still depends on unassigned
    /// variables.
    pub fn evaluate_partial(&self, assignment: &[Option<bool>]) -> Option<bool> {
        self.evaluate_with(&|id| assignment.get(id).copied().flatten())
    }

    fn evaluate_with<F: Fn(usize) -> Option<bool>>(&self, lookup: &F) -> Option<bool> {
        match self {
            Expr::Var(id) => lookup(*id),

            Expr::Not(inner) => inner.evaluate_with(lookup).map(|b| !b),

            Expr::And(operands) => {
                let mut undecided = false;
                for op in operands {
                    match op.evaluate_with(lookup) {
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

            Expr::Or(operands) => {
                let mut undecided = false;
                for op in operands {
                    match op.evaluate_with(lookup) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => undecided = true,
                    }
                }
                if undecided {
                    None
                } else {
                    Some(false)
                }
            }

            Expr::Iff(operands) => {
                let (mut seen_true, mut seen_false, mut undecided) = (false, false, false);
                for op in operands {
                    match op.evaluate_with(lookup) {
                        Some(true) => seen_true = true,
                        Some(false) => seen_false = true,
                        None => undecided = true,
                    }
                    if seen_true && seen_false {
                        return Some(false);
                    }
                }
                if undecided {
                    None
                } else {
                    Some(true)
                }
            }

            Expr::Xor(left, right) => {
                let l = left.evaluate_with(lookup)?;
                let r = right.evaluate_with(lookup)?;
                Some(l != r)
            }

            Expr::AtMost { operands, k } => {
                let (mut known_true, mut unknown) = (0usize, 0usize);
                for op in operands {
                    match op.evaluate_with(lookup) {
                        Some(true) => known_true += 1,
                        Some(false) => {}
                        None => unknown += 1,
                    }
                }
                if known_true > *k {
                    Some(false)
                } else if known_true + unknown <= *k {
                    Some(true)
                } else {
                    None
                }
            }

            Expr::WeightedSumGe {
                operands,
                weights,
                bound,
            } => {
                let (min, max) = sum_range(operands, weights, lookup);
                if min >= *bound {
                    Some(true)
                } else if max < *bound {
                    Some(false)
                } else {
                    None
                }
            }

            Expr::WeightedSumLe {
                operands,
                weights,
                bound,
            } => {
                let (min, max) = sum_range(operands, weights, lookup);
                if max <= *bound {
                    Some(true)
                } else if min > *bound {
                    Some(false)
                } else {
                    None
                }
            }
        }
    }

    /// Largest variable id referenced, if any.
    pub fn max_variable(&self) -> Option<usize> {
        match self {
            Expr::Var(id) => Some(*id),
            Expr::Not(inner) => inner.max_variable(),
            Expr::Xor(left, right) => left.max_variable().max(right.max_variable()),
            Expr::And(operands)
            | Expr::Or(operands)
            | Expr::Iff(operands)
            | Expr::AtMost { operands, .. }
            | Expr::WeightedSumGe { operands, .. }
            | Expr::WeightedSumLe { operands, .. } => {
                operands.iter().filter_map(Expr::max_variable).max()
            }
        }
    }
}

fn check_weights(operands: &[Expr], weights: &[f64]) -> Result<()> {
    if operands.len() != weights.len() {
        return Err(CffsError::WeightMismatch {
            operands: operands.len(),
            weights: weights.len(),
        });
    }
    Ok(())
}

/// Smallest and largest weighted sum reachable from the current assignment.
fn sum_range<F: Fn(usize) -> Option<bool>>(
    operands: &[Expr],
    weights: &[f64],
    lookup: &F,
) -> (f64, f64) {
    let mut min = 0.0;
    let mut max = 0.0;
    for (op, w) in operands.iter().zip(weights) {
        match op.evaluate_with(lookup) {
            Some(true) => {
                min += w;
                max += w;
            }
            Some(false) => {}
            None => {
                min += w.min(0.0);
                max += w.max(0.0);
            }
        }
    }
    (min, max)
}

fn write_list(f: &mut fmt::Formatter<'_>, operands: &[Expr], sep: &str) -> fmt::Result {
    for (i, op) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{op}")?;
    }
    Ok(())
}

fn write_weighted(f: &mut fmt::Formatter<'_>, operands: &[Expr], weights: &[f64]) -> fmt::Result {
    for (i, (op, w)) in operands.iter().zip(weights).enumerate() {
        if i > 0 {
            write!(f, " + ")?;
        }
        write!(f, "{w}*{op}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(id) => write!(f, "x{id}"),
            Expr::Not(inner) => write!(f, "!{inner}"),
            Expr::And(operands) => {
                write!(f, "(")?;
                write_list(f, operands, " & ")?;
                write!(f, ")")
            }
            Expr::Or(operands) => {
                write!(f, "(")?;
                write_list(f, operands, " | ")?;
                write!(f, ")")
            }
            Expr::Iff(operands) => {
                write!(f, "(")?;
                write_list(f, operands, " <-> ")?;
                write!(f, ")")
            }
            Expr::Xor(left, right) => write!(f, "({left} ^ {right})"),
            Expr::AtMost { operands, k } => {
                write!(f, "AtMost({k}; ")?;
                write_list(f, operands, ", ")?;
                write!(f, ")")
            }
            Expr::WeightedSumGe {
                operands,
                weights,
                bound,
            } => {
                write!(f, "(")?;
                write_weighted(f, operands, weights)?;
                write!(f, " >= {bound})")
            }
            Expr::WeightedSumLe {
                operands,
                weights,
                bound,
            } => {
                write!(f, "(")?;
                write_weighted(f, operands, weights)?;
                write!(f, " <= {bound})")
            }
        }
    }
}
