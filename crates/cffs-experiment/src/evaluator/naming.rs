//! Materials-science feature naming convention.
//!
//! Feature names encode what they measure:
//!
//! | Name | Meaning |
//! |---|---|
//! | `rho_7` | quantity `rho` on slip system 7 |
//! | `rho_mean` | aggregate `mean` of `rho` over slip systems |
//! | `delta_rho_mean` | change of `rho_mean` over time |
//! | `eps_xy` | plastic strain tensor component `xy` |
//! | `glissile_mean` | feature of the `glissile` reaction type |
//! | `gamma_3`, `gamma_abs_mean` | plain and absolute strain rates |
//! | `mean_free_path`, `free_path_per_voxel` | alternative dislocation density descriptors |
//!
//! [`FeatureName::parse`] is the single place this convention is decoded;
//! the evaluators only compare parsed parts.

use std::sync::LazyLock;

use regex::Regex;

/// Aggregate functions computed over per-slip-system values.
pub const AGGREGATES: [&str; 6] = ["min", "max", "mean", "median", "std", "sum"];

/// Dislocation reaction types.
pub const REACTION_TYPES: [&str; 4] = ["glissile", "lomer", "hirth", "collinear"];

/// Number of slip systems, numbered from 1.
pub const NUM_SLIP_SYSTEMS: u32 = 12;

/// Slip systems grouped by Schmid factor for (1 0 0) loading.
pub const SCHMID_GROUPS_100: [&[u32]; 2] = [&[1, 2, 5, 6, 7, 8, 11, 12], &[3, 4, 9, 10]];

const DELTA_PREFIX: &str = "delta_";

static STRAIN_COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|_)eps_([a-z]{2})(?:_|$)").expect("strain component pattern is valid")
});

/// Trailing `_<token>` of a feature name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// Numeric suffix, e.g. the slip system in `rho_7`.
    Index(u32),
    /// Aggregate function suffix, one of [`AGGREGATES`].
    Aggregate(&'static str),
    None,
}

/// Which of the alternative dislocation density descriptors a name is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityDescriptor {
    /// `rho_<aggregate>`
    AggregatedDensity,
    MeanFreePath,
    FreePathPerVoxel,
}

impl DensityDescriptor {
    pub const ALL: [DensityDescriptor; 3] = [
        DensityDescriptor::AggregatedDensity,
        DensityDescriptor::MeanFreePath,
        DensityDescriptor::FreePathPerVoxel,
    ];
}

/// Plain (`gamma`) or absolute (`gamma_abs`) strain rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrainRate {
    Plain,
    Absolute,
}

/// A feature name split into its conventional parts.
///
/// # Example
///
/// ```
/// use cffs_experiment::evaluator::naming::{FeatureName, Suffix};
///
/// let name = FeatureName::parse("delta_rho_mean");
/// assert_eq!(name.quantity(), "delta_rho");
/// assert_eq!(name.base_quantity(), "rho");
/// assert_eq!(name.suffix(), Suffix::Aggregate("mean"));
/// assert!(name.is_delta());
///
/// let name = FeatureName::parse("gamma_11");
/// assert_eq!(name.quantity(), "gamma");
/// assert_eq!(name.slip_system(), Some(11));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureName<'a> {
    name: &'a str,
    quantity: &'a str,
    suffix: Suffix,
}

impl<'a> FeatureName<'a> {
    pub fn parse(name: &'a str) -> Self {
        let split = name.rsplit_once('_').and_then(|(quantity, token)| {
            if quantity.is_empty() {
                None
            } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                token.parse().ok().map(|index| (quantity, Suffix::Index(index)))
            } else {
                AGGREGATES
                    .into_iter()
                    .find(|aggregate| *aggregate == token)
                    .map(|aggregate| (quantity, Suffix::Aggregate(aggregate)))
            }
        });
        let (quantity, suffix) = split.unwrap_or((name, Suffix::None));
        Self {
            name,
            quantity,
            suffix,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Name without its index or aggregate suffix.
    pub fn quantity(&self) -> &'a str {
        self.quantity
    }

    /// [`quantity`](Self::quantity) without a `delta_` prefix.
    pub fn base_quantity(&self) -> &'a str {
        self.quantity
            .strip_prefix(DELTA_PREFIX)
            .unwrap_or(self.quantity)
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }

    /// Slip system `1..=12` named by the suffix.
    pub fn slip_system(&self) -> Option<u32> {
        match self.suffix {
            Suffix::Index(index) if (1..=NUM_SLIP_SYSTEMS).contains(&index) => Some(index),
            _ => None,
        }
    }

    pub fn is_original(&self) -> bool {
        matches!(self.suffix, Suffix::Index(_))
    }

    pub fn aggregate(&self) -> Option<&'static str> {
        match self.suffix {
            Suffix::Aggregate(aggregate) => Some(aggregate),
            _ => None,
        }
    }

    /// Quantity a `_1` feature is the first slip-system value of.
    pub fn base_of_first_slip_system(&self) -> Option<&'a str> {
        (self.suffix == Suffix::Index(1)).then_some(self.quantity)
    }

    pub fn is_delta(&self) -> bool {
        self.name.starts_with(DELTA_PREFIX)
    }

    /// Name of the value a `delta_` feature is the change of.
    pub fn delta_of(&self) -> Option<&'a str> {
        self.name.strip_prefix(DELTA_PREFIX)
    }

    /// Whether the name mentions `reaction_type`. A name may mention several.
    pub fn has_reaction_type(&self, reaction_type: &str) -> bool {
        self.name.contains(reaction_type)
    }

    /// Strain tensor component, e.g. `xy` for `eps_xy` or `delta_eps_xy`.
    pub fn strain_component(&self) -> Option<&'a str> {
        STRAIN_COMPONENT
            .captures(self.name)
            .and_then(|captures| captures.get(1))
            .map(|component| component.as_str())
    }

    /// Whether the name is exactly a tensor component, `eps_<ab>`.
    pub fn is_strain_component(&self) -> bool {
        self.name.len() == "eps_xx".len() && self.strain_component().is_some()
    }

    /// Whether the name carries `descriptor`. Descriptors are not exclusive:
    /// `rho_mean_free_path` is both an aggregated density and a mean free path.
    pub fn has_density_descriptor(&self, descriptor: DensityDescriptor) -> bool {
        match descriptor {
            DensityDescriptor::AggregatedDensity => {
                let tokens: Vec<&str> = self.name.split('_').collect();
                tokens
                    .windows(2)
                    .any(|pair| pair[0] == "rho" && AGGREGATES.contains(&pair[1]))
            }
            DensityDescriptor::MeanFreePath => self.name.contains("mean_free_path"),
            DensityDescriptor::FreePathPerVoxel => self.name.contains("free_path_per_voxel"),
        }
    }

    pub fn strain_rate(&self) -> Option<StrainRate> {
        if self.name.contains("gamma_abs") {
            Some(StrainRate::Absolute)
        } else if self.name.contains("gamma") {
            Some(StrainRate::Plain)
        } else {
            None
        }
    }
}
