//! Evaluator composition.

use cffs_config::EvaluatorConfig;
use cffs_core::{CffsError, Expr, Problem, Result};

use super::ConstraintEvaluator;
use crate::builder::build_evaluator;

/// An evaluator whose constraints are those of its members, concatenated in
/// member order.
pub trait ContainerEvaluator {
    fn member_evaluators(&self) -> &[Box<dyn ConstraintEvaluator>];

    fn member_constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let mut constraints = Vec::new();
        for member in self.member_evaluators() {
            constraints.extend(member.constraints(problem)?);
        }
        Ok(constraints)
    }
}

/// Container built from an ordered list of evaluator kinds and arguments.
///
/// # Example
///
/// ```
/// use cffs_experiment::evaluator::{
///     CombinedEvaluator, ConstraintEvaluator, ContainerEvaluator, GlobalAtMostEvaluator,
///     SelectAggregateEvaluator,
/// };
///
/// let combined = CombinedEvaluator::from_members(vec![
///     Box::new(GlobalAtMostEvaluator::new(5)),
///     Box::new(SelectAggregateEvaluator),
/// ])
/// .unwrap();
///
/// assert_eq!(combined.member_evaluators().len(), 2);
/// assert_eq!(combined.name(), "combined");
/// ```
pub struct CombinedEvaluator {
    members: Vec<Box<dyn ConstraintEvaluator>>,
}

impl CombinedEvaluator {
    /// Builds one member per configuration, in order, all bound to the pool
    /// of `problem`.
    ///
    /// # Errors
    ///
    /// [`CffsError::DuplicateEvaluator`] if a kind appears twice, or any
    /// error constructing a member.
    pub fn from_config(problem: &dyn Problem, configs: &[EvaluatorConfig]) -> Result<Self> {
        let members = configs
            .iter()
            .map(|config| build_evaluator(problem, config))
            .collect::<Result<Vec<_>>>()?;
        Self::from_members(members)
    }

    pub fn from_members(members: Vec<Box<dyn ConstraintEvaluator>>) -> Result<Self> {
        for (i, member) in members.iter().enumerate() {
            if members[..i].iter().any(|other| other.name() == member.name()) {
                return Err(CffsError::DuplicateEvaluator(member.name().to_string()));
            }
        }
        Ok(Self { members })
    }

    pub fn member_names(&self) -> Vec<&'static str> {
        self.members.iter().map(|member| member.name()).collect()
    }
}

impl ContainerEvaluator for CombinedEvaluator {
    fn member_evaluators(&self) -> &[Box<dyn ConstraintEvaluator>] {
        &self.members
    }
}

impl ConstraintEvaluator for CombinedEvaluator {
    fn name(&self) -> &'static str {
        "combined"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        self.member_constraints(problem)
    }
}

impl std::fmt::Debug for CombinedEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedEvaluator")
            .field("members", &self.member_names())
            .finish()
    }
}
