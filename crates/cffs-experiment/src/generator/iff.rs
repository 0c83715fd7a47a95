use cffs_core::{Cardinality, Expr, ExperimentRng, Problem, Result, Variable};

use super::{with_global_bound, ConstraintGenerator, GeneratorSettings, TrialShape};

/// The sampled variables are selected together or not at all.
///
/// Like [`AtLeastGenerator`](super::AtLeastGenerator), the first constraint
/// of each trial carries a global at-most bound.
#[derive(Debug, Clone)]
pub struct IffGenerator {
    shape: TrialShape,
    global_at_most: usize,
}

impl IffGenerator {
    pub fn new(
        problem: &dyn Problem,
        global_at_most: impl Into<Cardinality>,
        settings: GeneratorSettings,
    ) -> Result<Self> {
        let pool_size = problem.variables().len();
        Ok(Self {
            shape: settings.normalize(pool_size)?,
            global_at_most: global_at_most.into().resolve(pool_size)?,
        })
    }
}

impl ConstraintGenerator for IffGenerator {
    fn name(&self) -> &'static str {
        "iff"
    }

    fn shape(&self) -> &TrialShape {
        &self.shape
    }

    fn generate(
        &self,
        problem: &dyn Problem,
        variables: &[Variable],
        _rng: &mut ExperimentRng,
    ) -> Result<Expr> {
        let constraint = Expr::iff(Expr::vars(variables));
        Ok(with_global_bound(problem, self.global_at_most, constraint))
    }
}
