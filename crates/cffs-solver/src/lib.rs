//! CFFS Solver - reference selection problem
//!
//! This crate provides [`SelectionProblem`], an in-memory implementation of
//! the [`cffs_core::Problem`] interface:
//! - Exact solution fractions by depth-first model counting
//! - Monte Carlo estimates of the solution fraction
//! - Quality maximization by branch-and-bound
//!
//! All three work on three-valued partial evaluation of the constraint set,
//! so subtrees whose outcome is already decided are never enumerated.
//! Exact counting and optimization are still exponential in the worst case
//! and are meant for experiment-sized pools.

pub mod counting;
pub mod optimize;
pub mod problem;


pub use optimize::{BranchAndBound, SearchConfig, SearchOutcome};
pub use problem::SelectionProblem;
