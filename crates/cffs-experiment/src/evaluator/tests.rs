//! Tests for the constraint evaluators.

use cffs_config::EvaluatorConfig;
use cffs_core::{CffsError, Expr, Problem};
use cffs_solver::SelectionProblem;
use cffs_test::{ms, Fixture};

use super::*;
use crate::builder::build_evaluator;

fn pool(names: &[&str]) -> SelectionProblem {
    let (names, qualities) = Fixture::from_names(names.iter().copied()).into_parts();
    SelectionProblem::new(names, qualities).unwrap()
}

fn feature_pool() -> SelectionProblem {
    let (names, qualities) = ms::feature_pool().into_parts();
    SelectionProblem::new(names, qualities).unwrap()
}

fn var(id: usize) -> Expr {
    Expr::Var(id)
}

fn or(ids: &[usize]) -> Expr {
    Expr::or(ids.iter().map(|&id| var(id)))
}

fn at_most(operands: Vec<Expr>, k: usize) -> Expr {
    Expr::at_most(operands, k).unwrap()
}

fn not_both(left: &[usize], right: &[usize]) -> Expr {
    Expr::not(Expr::and([or(left), or(right)]))
}

fn every_kind(problem: &dyn Problem) -> Vec<EvaluatorConfig> {
    let n = problem.variables().len();
    let mut matrix = vec![vec![0.0; n]; n];
    matrix[3][1] = 0.95;
    matrix[7][2] = 0.5;
    vec![
        EvaluatorConfig::None,
        EvaluatorConfig::GlobalAtMost { global_at_most: 5 },
        EvaluatorConfig::QualityThreshold { threshold: 10.0 },
        EvaluatorConfig::CorrelationRemoval {
            matrix,
            threshold: 0.9,
        },
        EvaluatorConfig::SelectSchmidGroup,
        EvaluatorConfig::SelectQuantitySchmidGroup,
        EvaluatorConfig::SelectSchmidGroupRepresentative,
        EvaluatorConfig::SelectQuantitySchmidGroupRepresentative,
        EvaluatorConfig::SelectWholeSlipSystems,
        EvaluatorConfig::SelectReactionType,
        EvaluatorConfig::SelectValueOrDelta,
        EvaluatorConfig::SelectStrainTensor,
        EvaluatorConfig::SelectDislocationDensity,
        EvaluatorConfig::SelectStrainRate,
        EvaluatorConfig::SelectAggregate,
        EvaluatorConfig::SelectQuantityAggregate,
        EvaluatorConfig::SelectAggregateOrOriginal,
    ]
}

#[test]
fn test_no_constraint() {
    let problem = pool(&["a_1", "a_2"]);
    assert!(NoConstraintEvaluator.constraints(&problem).unwrap().is_empty());
}

#[test]
fn test_global_at_most() {
    let problem = pool(&["a", "b", "c"]);
    let constraints = GlobalAtMostEvaluator::new(2).constraints(&problem).unwrap();
    assert_eq!(constraints, vec![at_most(vec![var(0), var(1), var(2)], 2)]);
    assert_eq!(GlobalAtMostEvaluator::default().constraints(&problem).unwrap(), vec![
        at_most(vec![var(0), var(1), var(2)], 10)
    ]);
}

#[test]
fn test_quality_threshold() {
    let problem = SelectionProblem::new(["a", "b", "c"], vec![0.5, 0.05, 0.2]).unwrap();
    let constraints = QualityThresholdEvaluator::new(0.1)
        .constraints(&problem)
        .unwrap();
    assert_eq!(constraints, vec![Expr::not(var(1))]);
}

#[test]
fn test_correlation_removal() {
    let problem = pool(&["a", "b", "c"]);
    let matrix = vec![
        vec![1.0, 0.8, 0.1],
        vec![0.8, 1.0, 0.3],
        vec![0.1, 0.3, 1.0],
    ];
    let evaluator = CorrelationRemovalEvaluator::new(&problem, &matrix, 0.8).unwrap();
    assert_eq!(evaluator.pairs(), &[(1, 0)]);
    assert_eq!(
        evaluator.constraints(&problem).unwrap(),
        vec![Expr::not(Expr::and([var(1), var(0)]))]
    );
}

#[test]
fn test_correlation_removal_shape_mismatch() {
    let problem = pool(&["a", "b", "c"]);

    let too_few_rows = vec![vec![1.0; 3]; 2];
    let err = CorrelationRemovalEvaluator::new(&problem, &too_few_rows, 0.5).unwrap_err();
    assert!(matches!(
        err,
        CffsError::ShapeMismatch {
            rows: 2,
            expected: 3,
            ..
        }
    ));

    let ragged = vec![vec![1.0; 3], vec![1.0; 2], vec![1.0; 3]];
    let err = CorrelationRemovalEvaluator::new(&problem, &ragged, 0.5).unwrap_err();
    assert!(matches!(
        err,
        CffsError::ShapeMismatch {
            cols: 2,
            expected: 3,
            ..
        }
    ));
}

#[test]
fn test_schmid_group() {
    let problem = pool(&["rho_1", "rho_3", "rho_mean", "gamma_12"]);
    let constraints = SelectSchmidGroupEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![at_most(vec![or(&[0, 3]), or(&[1])], 1)]);
}

#[test]
fn test_schmid_group_omits_empty_groups() {
    let problem = pool(&["rho_1", "rho_2"]);
    let constraints = SelectSchmidGroupEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![at_most(vec![or(&[0, 1])], 1)]);

    let problem = pool(&["rho_mean"]);
    assert!(SelectSchmidGroupEvaluator.constraints(&problem).unwrap().is_empty());
}

#[test]
fn test_quantity_schmid_group() {
    let problem = pool(&["rho_1", "rho_3", "gamma_1", "gamma_2"]);
    let constraints = SelectQuantitySchmidGroupEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(
        constraints,
        vec![
            at_most(vec![or(&[0]), or(&[1])], 1),
            at_most(vec![or(&[2, 3])], 1),
        ]
    );
}

#[test]
fn test_schmid_group_representative() {
    let problem = pool(&["rho_1", "rho_3", "gamma_4", "rho_mean"]);
    let constraints = SelectSchmidGroupRepresentativeEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(
        constraints,
        vec![
            at_most(vec![var(0)], 1),
            at_most(vec![var(1), var(2)], 1),
        ]
    );
}

#[test]
fn test_schmid_group_representative_skips_empty_group() {
    let problem = pool(&["rho_1", "rho_2"]);
    let constraints = SelectSchmidGroupRepresentativeEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(constraints, vec![at_most(vec![var(0), var(1)], 1)]);
}

#[test]
fn test_quantity_schmid_group_representative() {
    let problem = pool(&["rho_1", "rho_4", "gamma_1", "gamma_2"]);
    let constraints = SelectQuantitySchmidGroupRepresentativeEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(
        constraints,
        vec![
            at_most(vec![var(0)], 1),
            at_most(vec![var(1)], 1),
            at_most(vec![var(2), var(3)], 1),
        ]
    );
}

#[test]
fn test_whole_slip_systems() {
    let problem = pool(&["a_1", "b_1", "a_2"]);
    let constraints = SelectWholeSlipSystemsEvaluator.constraints(&problem).unwrap();
    assert_eq!(
        constraints,
        vec![Expr::iff([var(0), var(1)]), Expr::iff([var(2)])]
    );
}

#[test]
fn test_whole_slip_systems_feature_pool() {
    let problem = feature_pool();
    let constraints = SelectWholeSlipSystemsEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints.len(), 12);
    // rho_s and gamma_s share slip system s
    assert_eq!(constraints[0], Expr::iff([var(0), var(14)]));
}

#[test]
fn test_reaction_type() {
    let problem = pool(&["glissile_mean", "rho_1", "lomer_mean", "glissile_max"]);
    let constraints = SelectReactionTypeEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![at_most(vec![or(&[0, 3]), or(&[2])], 1)]);
}

#[test]
fn test_reaction_type_name_in_several_groups() {
    let mut problem = pool(&["glissile_lomer_mean", "rho_1"]);
    let constraints = SelectReactionTypeEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![at_most(vec![or(&[0]), or(&[0])], 1)]);

    // selecting it would satisfy two groups at once
    let record = SelectReactionTypeEvaluator
        .evaluate_constraints(&mut problem)
        .unwrap();
    assert_eq!(record.get("objective_value"), Some(1.0));
}

#[test]
fn test_value_or_delta() {
    let problem = pool(&["rho_mean", "delta_rho_mean", "delta_eps_xx", "eps_yy"]);
    let constraints = SelectValueOrDeltaEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![Expr::not(Expr::and([var(0), var(1)]))]);
}

#[test]
fn test_strain_tensor() {
    let problem = pool(&["eps_xx", "rho_1", "eps_yy", "delta_eps_xx"]);
    let constraints = SelectStrainTensorEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![at_most(vec![or(&[0, 3]), or(&[2])], 3)]);
}

#[test]
fn test_strain_tensor_without_components() {
    let problem = pool(&["delta_eps_xx", "rho_1"]);
    assert!(SelectStrainTensorEvaluator
        .constraints(&problem)
        .unwrap()
        .is_empty());
}

#[test]
fn test_dislocation_density() {
    let problem = pool(&[
        "rho_mean",
        "rho_1",
        "mean_free_path",
        "free_path_per_voxel",
        "rho_max",
    ]);
    let constraints = SelectDislocationDensityEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(
        constraints,
        vec![at_most(vec![or(&[0, 4]), or(&[2]), or(&[3])], 1)]
    );
}

#[test]
fn test_dislocation_density_name_in_several_groups() {
    let problem = pool(&["rho_mean_free_path", "free_path_per_voxel"]);
    let constraints = SelectDislocationDensityEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(
        constraints,
        vec![at_most(vec![or(&[0]), or(&[0]), or(&[1])], 1)]
    );
}

#[test]
fn test_strain_rate() {
    let problem = pool(&["gamma_1", "gamma_abs_mean", "rho_1", "gamma_mean"]);
    let constraints = SelectStrainRateEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![not_both(&[0, 3], &[1])]);
}

#[test]
fn test_strain_rate_without_rates() {
    let problem = pool(&["rho_1"]);
    let constraints = SelectStrainRateEvaluator.constraints(&problem).unwrap();
    assert_eq!(constraints, vec![not_both(&[], &[])]);
}

#[test]
fn test_aggregate() {
    let problem = pool(&["rho_mean", "gamma_mean", "rho_max", "rho_1"]);
    let constraints = SelectAggregateEvaluator.constraints(&problem).unwrap();
    // groups follow the aggregate order: min, max, mean, ...
    assert_eq!(constraints, vec![at_most(vec![or(&[2]), or(&[0, 1])], 1)]);
}

#[test]
fn test_quantity_aggregate() {
    let problem = pool(&["rho_1", "rho_mean", "rho_max", "gamma_1", "gamma_2"]);
    let constraints = SelectQuantityAggregateEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(constraints, vec![at_most(vec![var(1), var(2)], 1)]);
}

#[test]
fn test_aggregate_or_original() {
    let problem = pool(&["q_1", "q_mean"]);
    let constraints = SelectAggregateOrOriginalEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(constraints, vec![not_both(&[0], &[1])]);
}

#[test]
fn test_aggregate_or_original_per_quantity() {
    let problem = pool(&["rho_1", "rho_2", "gamma_1", "rho_mean", "rho_13"]);
    let constraints = SelectAggregateOrOriginalEvaluator
        .constraints(&problem)
        .unwrap();
    assert_eq!(
        constraints,
        vec![not_both(&[0, 1, 4], &[3]), not_both(&[2], &[])]
    );
}

#[test]
fn test_constraints_are_idempotent() {
    let problem = feature_pool();
    for config in every_kind(&problem) {
        let evaluator = build_evaluator(&problem, &config).unwrap();
        let first = evaluator.constraints(&problem).unwrap();
        let second = evaluator.constraints(&problem).unwrap();
        assert_eq!(first, second, "{}", evaluator.name());
    }
}

#[test]
fn test_names_match_config_kinds() {
    let problem = feature_pool();
    for config in every_kind(&problem) {
        let evaluator = build_evaluator(&problem, &config).unwrap();
        assert_eq!(evaluator.name(), config.kind_name());
    }
}

#[test]
fn test_combined_concatenates_in_order() {
    let problem = feature_pool();
    let configs = vec![
        EvaluatorConfig::SelectAggregateOrOriginal,
        EvaluatorConfig::SelectWholeSlipSystems,
    ];
    let combined = CombinedEvaluator::from_config(&problem, &configs).unwrap();

    let mut expected = SelectAggregateOrOriginalEvaluator
        .constraints(&problem)
        .unwrap();
    expected.extend(SelectWholeSlipSystemsEvaluator.constraints(&problem).unwrap());

    assert_eq!(
        combined.member_names(),
        vec!["select_aggregate_or_original", "select_whole_slip_systems"]
    );
    assert_eq!(combined.constraints(&problem).unwrap(), expected);
}

#[test]
fn test_combined_every_kind() {
    let problem = feature_pool();
    let combined = CombinedEvaluator::from_config(&problem, &every_kind(&problem)).unwrap();
    assert_eq!(combined.member_evaluators().len(), 17);
    assert!(!combined.constraints(&problem).unwrap().is_empty());
}

#[test]
fn test_combined_rejects_duplicates() {
    let problem = feature_pool();
    let configs = vec![
        EvaluatorConfig::SelectAggregate,
        EvaluatorConfig::SelectStrainRate,
        EvaluatorConfig::SelectAggregate,
    ];
    let err = CombinedEvaluator::from_config(&problem, &configs).unwrap_err();
    assert!(matches!(err, CffsError::DuplicateEvaluator(name) if name == "select_aggregate"));
}

#[test]
fn test_evaluate_constraints() {
    let mut problem = pool(&["rho_1", "rho_2", "rho_mean"]);
    let record = SelectAggregateOrOriginalEvaluator
        .evaluate_constraints(&mut problem)
        .unwrap();

    // rho_1 + rho_2 (3 + 2) beats rho_mean (1)
    assert_eq!(record.get("objective_value"), Some(5.0));
    assert_eq!(record.get("num_constraints"), Some(1.0));
    // exact fraction is 5/8
    let frac = record.get("frac_solutions").unwrap();
    assert!((frac - 0.625).abs() < 0.03, "estimate {frac}");
    assert_eq!(problem.num_constraints(), 0);
}

#[test]
fn test_evaluate_constraints_is_reproducible() {
    let mut problem = pool(&["rho_1", "rho_2", "rho_3", "rho_mean", "rho_max"]);
    let evaluator = CombinedEvaluator::from_config(
        &problem,
        &[
            EvaluatorConfig::SelectQuantityAggregate,
            EvaluatorConfig::SelectSchmidGroup,
        ],
    )
    .unwrap();

    let first = evaluator.evaluate_constraints(&mut problem).unwrap();
    let second = evaluator.evaluate_constraints(&mut problem).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_estimate_settings() {
    let mut problem = pool(&["a", "b"]);
    let settings = EstimateSettings {
        seed: 7,
        iterations: 0,
    };
    // zero iterations is rejected by the solver, constraints are still cleared
    let result = GlobalAtMostEvaluator::new(1).evaluate_constraints_with(&mut problem, &settings);
    assert!(result.is_err());
    assert_eq!(problem.num_constraints(), 0);
}
