//! Evaluators that do not depend on the naming convention.

use cffs_core::{CffsError, Expr, Problem, Result};

use super::ConstraintEvaluator;

/// No constraints; the evaluation only optimizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConstraintEvaluator;

impl ConstraintEvaluator for NoConstraintEvaluator {
    fn name(&self) -> &'static str {
        "none"
    }

    fn constraints(&self, _problem: &dyn Problem) -> Result<Vec<Expr>> {
        Ok(Vec::new())
    }
}

/// At most `global_at_most` variables selected overall.
#[derive(Debug, Clone, Copy)]
pub struct GlobalAtMostEvaluator {
    global_at_most: usize,
}

impl GlobalAtMostEvaluator {
    pub const DEFAULT_GLOBAL_AT_MOST: usize = 10;

    pub fn new(global_at_most: usize) -> Self {
        Self { global_at_most }
    }
}

impl Default for GlobalAtMostEvaluator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GLOBAL_AT_MOST)
    }
}

impl ConstraintEvaluator for GlobalAtMostEvaluator {
    fn name(&self) -> &'static str {
        "global_at_most"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let variables = problem.variables();
        if variables.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Expr::at_most(
            Expr::vars(variables),
            self.global_at_most,
        )?])
    }
}

/// Variables with quality below `threshold` are never selected.
#[derive(Debug, Clone, Copy)]
pub struct QualityThresholdEvaluator {
    threshold: f64,
}

impl QualityThresholdEvaluator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl ConstraintEvaluator for QualityThresholdEvaluator {
    fn name(&self) -> &'static str {
        "quality_threshold"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        Ok(problem
            .variables()
            .iter()
            .zip(problem.qualities())
            .filter(|(_, quality)| *quality < self.threshold)
            .map(|(variable, _)| Expr::not(variable.expr()))
            .collect())
    }
}

/// Pairs of variables correlated at or above `threshold` are never selected
/// together.
///
/// The matrix is indexed like the variable pool; only its lower triangle is
/// read.
#[derive(Debug, Clone)]
pub struct CorrelationRemovalEvaluator {
    pairs: Vec<(usize, usize)>,
}

impl CorrelationRemovalEvaluator {
    /// # Errors
    ///
    /// [`CffsError::ShapeMismatch`] unless `matrix` is `n x n` for a pool of
    /// `n` variables.
    pub fn new(problem: &dyn Problem, matrix: &[Vec<f64>], threshold: f64) -> Result<Self> {
        let expected = problem.variables().len();
        if let Some(row) = matrix.iter().find(|row| row.len() != expected) {
            return Err(CffsError::ShapeMismatch {
                rows: matrix.len(),
                cols: row.len(),
                expected,
            });
        }
        if matrix.len() != expected {
            return Err(CffsError::ShapeMismatch {
                rows: matrix.len(),
                cols: expected,
                expected,
            });
        }

        let pairs = (0..expected)
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .filter(|&(i, j)| matrix[i][j] >= threshold)
            .collect();
        Ok(Self { pairs })
    }

    /// Index pairs `(i, j)`, `j < i`, that may not be co-selected.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

impl ConstraintEvaluator for CorrelationRemovalEvaluator {
    fn name(&self) -> &'static str {
        "correlation_removal"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let variables = problem.variables();
        self.pairs
            .iter()
            .map(|&(i, j)| {
                let first = variables.get(i).ok_or(CffsError::UnknownVariable(i))?;
                let second = variables.get(j).ok_or(CffsError::UnknownVariable(j))?;
                Ok(Expr::not(Expr::and([first.expr(), second.expr()])))
            })
            .collect()
    }
}
