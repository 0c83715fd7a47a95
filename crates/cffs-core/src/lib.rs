//! CFFS Core - Core types and traits for constrained feature selection
//!
//! This crate provides the fundamental abstractions shared by the solver and
//! the experiment framework:
//! - [`Variable`]s, the selectable features of a problem
//! - [`Expr`], the boolean/cardinality constraint language
//! - The [`Problem`] trait through which experiments add constraints, count
//!   solutions and optimize
//! - [`Cardinality`] normalization of relative and absolute bounds
//! - [`EvaluationRecord`], one row of experiment output

pub mod cardinality;
pub mod error;
pub mod expr;
pub mod problem;
pub mod record;
pub mod rng;
pub mod variable;


pub use cardinality::Cardinality;
pub use error::{CffsError, Result};
pub use expr::Expr;
pub use problem::Problem;
pub use record::EvaluationRecord;
pub use rng::{seeded_rng, ExperimentRng, DEFAULT_SEED};
pub use variable::Variable;
