//! Tests for experiment configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        name = "ms"

        [solver]
        node_limit = 100000
        estimate_iterations = 500

        [[generators]]
        type = "iff"
        global_at_most = 4
        min_num_constraints = 1
        max_num_constraints = 3
        min_num_variables = 2
        max_num_variables = 0.5
        num_repetitions = 20
        seed = 7

        [[evaluators]]
        type = "quality_threshold"
        threshold = 0.1

        [[evaluators]]
        type = "correlation_removal"
        matrix = [[1.0, 0.9], [0.9, 1.0]]
        threshold = 0.8
    "#;

    let config = ExperimentConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.name, "ms");
    assert_eq!(config.solver.node_limit, Some(100_000));
    assert_eq!(config.solver.estimate_iterations, 500);

    let generator = &config.generators[0];
    assert_eq!(generator.kind, GeneratorKind::Iff);
    assert_eq!(generator.global_at_most, Some(4.0));
    assert_eq!(generator.max_num_variables, 0.5);
    assert_eq!(generator.num_repetitions, 20);
    assert_eq!(generator.seed, 7);

    assert_eq!(
        config.evaluators[0],
        EvaluatorConfig::QualityThreshold { threshold: 0.1 }
    );
    assert!(matches!(
        &config.evaluators[1],
        EvaluatorConfig::CorrelationRemoval { matrix, threshold }
            if matrix.len() == 2 && *threshold == 0.8
    ));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        name: ms
        generators:
          - type: nand
            max_num_constraints: 5
        evaluators:
          - type: global_at_most
          - type: select_aggregate_or_original
    "#;

    let config = ExperimentConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.generators[0].kind, GeneratorKind::Nand);
    assert_eq!(config.generators[0].max_num_constraints, 5.0);
    assert_eq!(
        config.evaluators,
        vec![
            EvaluatorConfig::GlobalAtMost { global_at_most: 10 },
            EvaluatorConfig::SelectAggregateOrOriginal,
        ]
    );
}

#[test]
fn test_generator_defaults() {
    let config = ExperimentConfig::from_toml_str(
        r#"
        [[generators]]
        type = "at_most"
    "#,
    )
    .unwrap();

    let generator = &config.generators[0];
    assert_eq!(generator.cardinality, None);
    assert_eq!(generator.min_num_constraints, 1.0);
    assert_eq!(generator.max_num_constraints, 1.0);
    assert_eq!(generator.min_num_variables, 2.0);
    assert_eq!(generator.max_num_variables, 2.0);
    assert_eq!(generator.num_repetitions, 1);
    assert_eq!(generator.seed, DEFAULT_SEED);
    assert_eq!(config.name, "experiment");
    assert_eq!(config.solver.estimate_iterations, DEFAULT_ESTIMATE_ITERATIONS);
}

#[test]
fn test_at_least_requires_global_bound() {
    let err = ExperimentConfig::from_toml_str(
        r#"
        [[generators]]
        type = "at_least"
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("global_at_most")));
}

#[test]
fn test_xor_requires_two_variables() {
    let config = ExperimentConfig::new("xor")
        .with_generator(GeneratorConfig::new(GeneratorKind::Xor).with_num_variables(2.0, 3.0));
    assert!(config.validate().is_err());
}

#[test]
fn test_min_exceeds_max() {
    let config = ExperimentConfig::new("bounds").with_generator(
        GeneratorConfig::new(GeneratorKind::Nand).with_num_constraints(4.0, 2.0),
    );
    assert!(config.validate().is_err());
}

#[test]
fn test_duplicate_evaluator_rejected() {
    let config = ExperimentConfig::new("dup")
        .with_evaluator(EvaluatorConfig::SelectAggregate)
        .with_evaluator(EvaluatorConfig::SelectAggregate);
    assert!(config.validate().is_err());
}

#[test]
fn test_builder() {
    let config = ExperimentConfig::new("builder")
        .with_node_limit(50)
        .with_generator(
            GeneratorConfig::new(GeneratorKind::AtLeast)
                .with_global_at_most(0.5)
                .with_num_repetitions(3),
        )
        .with_evaluator(EvaluatorConfig::None);

    assert_eq!(config.solver.node_limit, Some(50));
    assert_eq!(config.generators[0].num_repetitions, 3);
    assert!(config.validate().is_ok());
}
