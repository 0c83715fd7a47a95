use cffs_core::{Cardinality, Expr, ExperimentRng, Problem, Result, Variable};

use super::{random_cardinality, ConstraintGenerator, GeneratorSettings, TrialShape};

/// At most `k` of the sampled variables are selected.
#[derive(Debug, Clone)]
pub struct AtMostGenerator {
    shape: TrialShape,
    cardinality: Option<usize>,
}

impl AtMostGenerator {
    /// `cardinality` may be unset, in which case `k` is drawn per
    /// constraint from `[1, |sampled| - 1]`.
    pub fn new(
        problem: &dyn Problem,
        cardinality: impl Into<Cardinality>,
        settings: GeneratorSettings,
    ) -> Result<Self> {
        let pool_size = problem.variables().len();
        Ok(Self {
            shape: settings.normalize(pool_size)?,
            cardinality: cardinality.into().normalize(pool_size, true)?,
        })
    }

    pub fn cardinality(&self) -> Option<usize> {
        self.cardinality
    }
}

impl ConstraintGenerator for AtMostGenerator {
    fn name(&self) -> &'static str {
        "at_most"
    }

    fn shape(&self) -> &TrialShape {
        &self.shape
    }

    fn generate(
        &self,
        _problem: &dyn Problem,
        variables: &[Variable],
        rng: &mut ExperimentRng,
    ) -> Result<Expr> {
        let k = match self.cardinality {
            Some(k) => k,
            None => random_cardinality(variables.len(), rng)?,
        };
        Ok(Expr::count_at_most(variables, k))
    }
}
