//! Materials-science feature name fixtures.
//!
//! Names follow the dataset convention: `<quantity>_<slip system>` for
//! per-slip-system values (1..=12), `<quantity>_<aggregate>` for summary
//! statistics, a `delta_` prefix for changes over time, and `eps_<ij>` for
//! strain tensor components.

use crate::fixture::Fixture;

/// `quantity_1` .. `quantity_12`.
pub fn slip_system_names(quantity: &str) -> Vec<String> {
    (1..=12).map(|i| format!("{quantity}_{i}")).collect()
}

/// `quantity_<aggregate>` for each aggregate.
pub fn aggregate_names(quantity: &str, aggregates: &[&str]) -> Vec<String> {
    aggregates
        .iter()
        .map(|aggregate| format!("{quantity}_{aggregate}"))
        .collect()
}

/// A pool touching every naming pattern the evaluators understand.
pub fn feature_pool() -> Fixture {
    let mut names = Vec::new();
    names.extend(slip_system_names("rho"));
    names.extend(aggregate_names("rho", &["mean", "max"]));
    names.extend(slip_system_names("gamma"));
    names.extend(aggregate_names("gamma_abs", &["mean"]));
    names.extend(["eps_xx", "eps_yy", "eps_zz", "eps_xy"].map(String::from));
    names.extend(["delta_eps_xx", "delta_rho_mean"].map(String::from));
    names.extend(["glissile_mean", "lomer_mean", "hirth_max"].map(String::from));
    names.extend(["mean_free_path", "free_path_per_voxel"].map(String::from));
    Fixture::from_names(names)
}
