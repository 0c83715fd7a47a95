use cffs_core::{Expr, ExperimentRng, Problem, Result, Variable};

use super::{ConstraintGenerator, GeneratorSettings, TrialShape};

/// Not all sampled variables are selected at once.
#[derive(Debug, Clone)]
pub struct NandGenerator {
    shape: TrialShape,
}

impl NandGenerator {
    pub fn new(problem: &dyn Problem, settings: GeneratorSettings) -> Result<Self> {
        Ok(Self {
            shape: settings.normalize(problem.variables().len())?,
        })
    }
}

impl ConstraintGenerator for NandGenerator {
    fn name(&self) -> &'static str {
        "nand"
    }

    fn shape(&self) -> &TrialShape {
        &self.shape
    }

    fn generate(
        &self,
        _problem: &dyn Problem,
        variables: &[Variable],
        _rng: &mut ExperimentRng,
    ) -> Result<Expr> {
        Ok(Expr::not(Expr::and(Expr::vars(variables))))
    }
}
