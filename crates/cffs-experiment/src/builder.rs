//! Construction of generators and evaluators from configuration.

use cffs_config::{EvaluatorConfig, GeneratorConfig, GeneratorKind};
use cffs_core::{Cardinality, Problem, Result};

use crate::evaluator::{
    ConstraintEvaluator, CorrelationRemovalEvaluator, GlobalAtMostEvaluator,
    NoConstraintEvaluator, QualityThresholdEvaluator, SelectAggregateEvaluator,
    SelectAggregateOrOriginalEvaluator, SelectDislocationDensityEvaluator,
    SelectQuantityAggregateEvaluator, SelectQuantitySchmidGroupEvaluator,
    SelectQuantitySchmidGroupRepresentativeEvaluator, SelectReactionTypeEvaluator,
    SelectSchmidGroupEvaluator, SelectSchmidGroupRepresentativeEvaluator,
    SelectStrainRateEvaluator, SelectStrainTensorEvaluator, SelectValueOrDeltaEvaluator,
    SelectWholeSlipSystemsEvaluator,
};
use crate::generator::{
    AtLeastGenerator, AtMostGenerator, GeneratorSettings, GlobalAtMostGenerator, IffGenerator,
    NandGenerator, XorGenerator,
};
use crate::runner::Source;

impl From<&GeneratorConfig> for GeneratorSettings {
    fn from(config: &GeneratorConfig) -> Self {
        GeneratorSettings::default()
            .with_num_constraints(config.min_num_constraints, config.max_num_constraints)
            .with_num_variables(config.min_num_variables, config.max_num_variables)
            .with_num_repetitions(config.num_repetitions)
            .with_seed(config.seed)
    }
}

/// Builds the generator a configuration describes, normalized against the
/// pool of `problem`.
pub fn build_generator(problem: &dyn Problem, config: &GeneratorConfig) -> Result<Source> {
    let settings = GeneratorSettings::from(config);
    let global_at_most = Cardinality::from(config.global_at_most);
    let cardinality = Cardinality::from(config.cardinality);
    let source = match config.kind {
        GeneratorKind::AtLeast => Source::Generator(Box::new(AtLeastGenerator::new(
            problem,
            global_at_most,
            cardinality,
            settings,
        )?)),
        GeneratorKind::AtMost => {
            Source::Generator(Box::new(AtMostGenerator::new(problem, cardinality, settings)?))
        }
        GeneratorKind::GlobalAtMost => {
            Source::Sweep(GlobalAtMostGenerator::new().with_seed(config.seed))
        }
        GeneratorKind::Iff => Source::Generator(Box::new(IffGenerator::new(
            problem,
            global_at_most,
            settings,
        )?)),
        GeneratorKind::Nand => Source::Generator(Box::new(NandGenerator::new(problem, settings)?)),
        GeneratorKind::Xor => Source::Generator(Box::new(XorGenerator::new(problem, settings)?)),
    };
    Ok(source)
}

/// Builds the evaluator a configuration describes.
pub fn build_evaluator(
    problem: &dyn Problem,
    config: &EvaluatorConfig,
) -> Result<Box<dyn ConstraintEvaluator>> {
    let evaluator: Box<dyn ConstraintEvaluator> = match config {
        EvaluatorConfig::None => Box::new(NoConstraintEvaluator),
        EvaluatorConfig::GlobalAtMost { global_at_most } => {
            Box::new(GlobalAtMostEvaluator::new(*global_at_most))
        }
        EvaluatorConfig::QualityThreshold { threshold } => {
            Box::new(QualityThresholdEvaluator::new(*threshold))
        }
        EvaluatorConfig::CorrelationRemoval { matrix, threshold } => Box::new(
            CorrelationRemovalEvaluator::new(problem, matrix, *threshold)?,
        ),
        EvaluatorConfig::SelectSchmidGroup => Box::new(SelectSchmidGroupEvaluator),
        EvaluatorConfig::SelectQuantitySchmidGroup => Box::new(SelectQuantitySchmidGroupEvaluator),
        EvaluatorConfig::SelectSchmidGroupRepresentative => {
            Box::new(SelectSchmidGroupRepresentativeEvaluator)
        }
        EvaluatorConfig::SelectQuantitySchmidGroupRepresentative => {
            Box::new(SelectQuantitySchmidGroupRepresentativeEvaluator)
        }
        EvaluatorConfig::SelectWholeSlipSystems => Box::new(SelectWholeSlipSystemsEvaluator),
        EvaluatorConfig::SelectReactionType => Box::new(SelectReactionTypeEvaluator),
        EvaluatorConfig::SelectValueOrDelta => Box::new(SelectValueOrDeltaEvaluator),
        EvaluatorConfig::SelectStrainTensor => Box::new(SelectStrainTensorEvaluator),
        EvaluatorConfig::SelectDislocationDensity => Box::new(SelectDislocationDensityEvaluator),
        EvaluatorConfig::SelectStrainRate => Box::new(SelectStrainRateEvaluator),
        EvaluatorConfig::SelectAggregate => Box::new(SelectAggregateEvaluator),
        EvaluatorConfig::SelectQuantityAggregate => Box::new(SelectQuantityAggregateEvaluator),
        EvaluatorConfig::SelectAggregateOrOriginal => {
            Box::new(SelectAggregateOrOriginalEvaluator)
        }
    };
    Ok(evaluator)
}
