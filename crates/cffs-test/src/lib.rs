//! Shared test fixtures for CFFS crates.
//!
//! This crate provides plain data (variable names and qualities) only. It
//! does NOT depend on `cffs-solver` so that the solver's own tests can use it
//! without a dependency cycle.
//!
//! - [`fixture`] - Generic variable pools
//! - [`ms`] - Materials-science feature names following the naming convention
//!   the constraint evaluators parse
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! cffs-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use cffs_test::Fixture;
//!
//! let (names, qualities) = Fixture::numbered(5).into_parts();
//! let problem = SelectionProblem::new(names, qualities)?;
//! ```

pub mod fixture;
pub mod ms;

pub use fixture::Fixture;
