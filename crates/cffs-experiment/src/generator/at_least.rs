use cffs_core::{Cardinality, Expr, ExperimentRng, Problem, Result, Variable};

use super::{random_cardinality, with_global_bound, ConstraintGenerator, GeneratorSettings, TrialShape};

/// At least `k` of the sampled variables are selected.
///
/// The first constraint of each trial is conjoined with a global at-most
/// bound over all variables.
#[derive(Debug, Clone)]
pub struct AtLeastGenerator {
    shape: TrialShape,
    global_at_most: usize,
    cardinality: Option<usize>,
}

impl AtLeastGenerator {
    /// `cardinality` may be unset, in which case `k` is drawn per
    /// constraint from `[1, |sampled| - 1]`.
    pub fn new(
        problem: &dyn Problem,
        global_at_most: impl Into<Cardinality>,
        cardinality: impl Into<Cardinality>,
        settings: GeneratorSettings,
    ) -> Result<Self> {
        let pool_size = problem.variables().len();
        Ok(Self {
            shape: settings.normalize(pool_size)?,
            global_at_most: global_at_most.into().resolve(pool_size)?,
            cardinality: cardinality.into().normalize(pool_size, true)?,
        })
    }

    pub fn global_at_most(&self) -> usize {
        self.global_at_most
    }
}

impl ConstraintGenerator for AtLeastGenerator {
    fn name(&self) -> &'static str {
        "at_least"
    }

    fn shape(&self) -> &TrialShape {
        &self.shape
    }

    fn generate(
        &self,
        problem: &dyn Problem,
        variables: &[Variable],
        rng: &mut ExperimentRng,
    ) -> Result<Expr> {
        let k = match self.cardinality {
            Some(k) => k,
            None => random_cardinality(variables.len(), rng)?,
        };
        let constraint = Expr::count_at_least(variables, k);
        Ok(with_global_bound(problem, self.global_at_most, constraint))
    }
}
