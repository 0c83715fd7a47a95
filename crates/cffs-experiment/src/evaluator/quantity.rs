//! Evaluators over alternative descriptions of the same physical quantity.

use cffs_core::{Expr, Problem, Result};

use super::naming::{DensityDescriptor, FeatureName, StrainRate, REACTION_TYPES};
use super::{at_most_groups, not_both, select, ConstraintEvaluator};

/// Features of at most one reaction type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectReactionTypeEvaluator;

impl ConstraintEvaluator for SelectReactionTypeEvaluator {
    fn name(&self) -> &'static str {
        "select_reaction_type"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let groups = REACTION_TYPES
            .into_iter()
            .map(|reaction_type| select(problem, |name| name.has_reaction_type(reaction_type)))
            .collect();
        Ok(at_most_groups(groups, 1)?.into_iter().collect())
    }
}

/// A value and its `delta_` counterpart are never selected together.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectValueOrDeltaEvaluator;

impl ConstraintEvaluator for SelectValueOrDeltaEvaluator {
    fn name(&self) -> &'static str {
        "select_value_or_delta"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let variables = problem.variables();
        Ok(variables
            .iter()
            .filter_map(|delta| {
                let value_name = FeatureName::parse(delta.name()).delta_of()?;
                let value = variables.iter().find(|v| v.name() == value_name)?;
                Some(Expr::not(Expr::and([value.expr(), delta.expr()])))
            })
            .collect())
    }
}

/// Features of at most three strain tensor components.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectStrainTensorEvaluator;

impl SelectStrainTensorEvaluator {
    pub const MAX_COMPONENTS: usize = 3;
}

impl ConstraintEvaluator for SelectStrainTensorEvaluator {
    fn name(&self) -> &'static str {
        "select_strain_tensor"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let components: Vec<&str> = problem
            .variables()
            .iter()
            .map(|variable| FeatureName::parse(variable.name()))
            .filter(FeatureName::is_strain_component)
            .filter_map(|name| name.strain_component())
            .collect();
        let groups = components
            .into_iter()
            .map(|component| select(problem, |name| name.strain_component() == Some(component)))
            .collect();
        Ok(at_most_groups(groups, Self::MAX_COMPONENTS)?
            .into_iter()
            .collect())
    }
}

/// At most one of the alternative dislocation density descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectDislocationDensityEvaluator;

impl ConstraintEvaluator for SelectDislocationDensityEvaluator {
    fn name(&self) -> &'static str {
        "select_dislocation_density"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let groups = DensityDescriptor::ALL
            .into_iter()
            .map(|descriptor| select(problem, |name| name.has_density_descriptor(descriptor)))
            .collect();
        Ok(at_most_groups(groups, 1)?.into_iter().collect())
    }
}

/// Plain and absolute strain rates are never selected together.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectStrainRateEvaluator;

impl ConstraintEvaluator for SelectStrainRateEvaluator {
    fn name(&self) -> &'static str {
        "select_strain_rate"
    }

    fn constraints(&self, problem: &dyn Problem) -> Result<Vec<Expr>> {
        let plain = select(problem, |name| name.strain_rate() == Some(StrainRate::Plain));
        let absolute = select(problem, |name| name.strain_rate() == Some(StrainRate::Absolute));
        Ok(vec![not_both(plain, absolute)])
    }
}
