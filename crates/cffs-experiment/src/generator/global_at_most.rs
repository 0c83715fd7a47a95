use cffs_core::{Cardinality, Problem, Result, DEFAULT_SEED};
use tracing::debug;

use super::{AtMostGenerator, ConstraintGenerator, GeneratorSettings};
use crate::result::ResultTable;

/// Deterministic sweep over the global cardinality axis.
///
/// For every `k` in `1..=n` (`n` = pool size) runs a single trial with one
/// at-most-`k` constraint over all variables. There is exactly one such
/// constraint per `k`, so nothing is sampled or repeated. Rows carry a
/// `cardinality` column.
#[derive(Debug, Clone)]
pub struct GlobalAtMostGenerator {
    seed: u64,
}

impl Default for GlobalAtMostGenerator {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl GlobalAtMostGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn evaluate_constraints(&self, problem: &mut dyn Problem) -> Result<ResultTable> {
        let pool_size = problem.variables().len();
        let settings = GeneratorSettings::default()
            .with_num_constraints(1usize, 1usize)
            .with_num_variables(pool_size, pool_size)
            .with_num_repetitions(1)
            .with_seed(self.seed);

        let mut table = ResultTable::new();
        for cardinality in 1..=pool_size {
            let generator =
                AtMostGenerator::new(&*problem, Cardinality::from(cardinality), settings.clone())?;
            let mut rows = generator.evaluate_constraints(problem)?;
            rows.annotate("cardinality", cardinality as f64);
            debug!(event = "sweep_step", cardinality, pool_size);
            table.append(rows);
        }
        Ok(table)
    }
}
