//! Error types for CFFS

use thiserror::Error;

/// Main error type for CFFS operations
#[derive(Debug, Error)]
pub enum CffsError {
    /// A cardinality resolved to a bound outside `[1, max]`
    #[error("Cardinality of {value} is outside range [1,{max}]")]
    CardinalityOutOfRange { value: i64, max: usize },

    /// A generator received a different number of sampled variables than it supports
    #[error("Expected {expected} sampled variables, got {actual}")]
    InvalidSample { expected: usize, actual: usize },

    /// A cardinality primitive was applied to an empty operand list
    #[error("{0} is undefined over zero operands")]
    EmptyOperands(&'static str),

    /// Weighted sum built with a different number of weights than operands
    #[error("Weighted sum has {operands} operands but {weights} weights")]
    WeightMismatch { operands: usize, weights: usize },

    /// Correlation matrix not aligned with the variable pool
    #[error("Correlation matrix of shape {rows}x{cols} does not match {expected} variables")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
    },

    /// Variable names and qualities are not index-aligned
    #[error("Got {variables} variables but {qualities} qualities")]
    LengthMismatch { variables: usize, qualities: usize },

    /// Constraint references a variable outside the problem's pool
    #[error("Constraint references unknown variable {0}")]
    UnknownVariable(usize),

    /// The same evaluator kind was configured twice in one combination
    #[error("Evaluator '{0}' configured more than once")]
    DuplicateEvaluator(String),

    /// Failure inside the solver collaborator
    #[error("Solver error: {0}")]
    Solver(String),
}

/// Result type alias for CFFS operations
pub type Result<T> = std::result::Result<T, CffsError>;
