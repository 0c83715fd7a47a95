use cffs_core::{CffsError, Expr, ExperimentRng, Problem, Result, Variable};

use super::{ConstraintGenerator, GeneratorSettings, TrialShape};

/// Exactly one of two sampled variables is selected.
#[derive(Debug, Clone)]
pub struct XorGenerator {
    shape: TrialShape,
}

impl XorGenerator {
    /// # Errors
    ///
    /// [`CffsError::InvalidSample`] unless the settings sample exactly two
    /// variables per constraint.
    pub fn new(problem: &dyn Problem, settings: GeneratorSettings) -> Result<Self> {
        let shape = settings.normalize(problem.variables().len())?;
        for bound in [*shape.variables.start(), *shape.variables.end()] {
            if bound != 2 {
                return Err(CffsError::InvalidSample {
                    expected: 2,
                    actual: bound,
                });
            }
        }
        Ok(Self { shape })
    }
}

impl ConstraintGenerator for XorGenerator {
    fn name(&self) -> &'static str {
        "xor"
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
        match variables {
            [left, right] => Ok(Expr::xor(left.expr(), right.expr())),
            _ => Err(CffsError::InvalidSample {
                expected: 2,
                actual: variables.len(),
            }),
        }
    }
}
