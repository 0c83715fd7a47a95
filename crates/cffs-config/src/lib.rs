//! Configuration system for CFFS experiments.
//!
//! Load experiment configuration from TOML or YAML to choose constraint
//! generators, evaluator combinations and solver limits without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use cffs_config::{ExperimentConfig, GeneratorKind};
//!
//! let config = ExperimentConfig::from_toml_str(r#"
//!     name = "synthetic"
//!
//!     [[generators]]
//!     type = "at_least"
//!     global_at_most = 0.5
//!     max_num_constraints = 3
//!     max_num_variables = 0.4
//!     num_repetitions = 10
//!
//!     [[generators]]
//!     type = "global_at_most"
//!
//!     [[evaluators]]
//!     type = "global_at_most"
//!     global_at_most = 5
//!
//!     [[evaluators]]
//!     type = "select_whole_slip_systems"
//! "#).unwrap();
//!
//! assert_eq!(config.generators.len(), 2);
//! assert_eq!(config.generators[0].kind, GeneratorKind::AtLeast);
//! assert_eq!(config.generators[0].num_repetitions, 10);
//! assert_eq!(config.evaluators.len(), 2);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use cffs_config::ExperimentConfig;
//!
//! let config = ExperimentConfig::load("experiment.toml").unwrap_or_default();
//! // Proceeds with an empty experiment if the file doesn't exist
//! ```

use std::path::Path;

pub use cffs_core::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monte Carlo iterations evaluators use to estimate the solution fraction.
pub const DEFAULT_ESTIMATE_ITERATIONS: usize = 10_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main experiment configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExperimentConfig {
    /// Experiment name, used in reports.
    #[serde(default = "default_name")]
    pub name: String,

    /// Randomized constraint generators, run in order.
    #[serde(default)]
    pub generators: Vec<GeneratorConfig>,

    /// Evaluators combined into one constraint set, in order.
    #[serde(default)]
    pub evaluators: Vec<EvaluatorConfig>,

    /// Solver limits.
    #[serde(default)]
    pub solver: SolverConfig,
}

fn default_name() -> String {
    "experiment".to_string()
}

impl ExperimentConfig {
    /// Creates a new empty configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Adds a generator configuration.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generators.push(generator);
        self
    }

    /// Adds an evaluator configuration.
    pub fn with_evaluator(mut self, evaluator: EvaluatorConfig) -> Self {
        self.evaluators.push(evaluator);
        self
    }

    /// Sets the branch-and-bound node limit.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.solver.node_limit = Some(node_limit);
        self
    }

    /// Checks constraints serde cannot express.
    ///
    /// - `at_least` and `iff` generators need `global_at_most`
    /// - `xor` generators sample exactly two variables
    /// - min bounds do not exceed max bounds when both are absolute
    /// - an evaluator type appears at most once
    pub fn validate(&self) -> Result<(), ConfigError> {
        for generator in &self.generators {
            generator.validate()?;
        }
        let mut seen: Vec<&'static str> = Vec::new();
        for evaluator in &self.evaluators {
            let kind = evaluator.kind_name();
            if seen.contains(&kind) {
                return Err(ConfigError::Invalid(format!(
                    "evaluator '{kind}' configured more than once"
                )));
            }
            seen.push(kind);
        }
        if self.solver.estimate_iterations == 0 {
            return Err(ConfigError::Invalid(
                "estimate_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Randomized generator type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    AtLeast,
    AtMost,
    GlobalAtMost,
    Iff,
    Nand,
    Xor,
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorKind::AtLeast => write!(f, "at_least"),
            GeneratorKind::AtMost => write!(f, "at_most"),
            GeneratorKind::GlobalAtMost => write!(f, "global_at_most"),
            GeneratorKind::Iff => write!(f, "iff"),
            GeneratorKind::Nand => write!(f, "nand"),
            GeneratorKind::Xor => write!(f, "xor"),
        }
    }
}

/// Generator configuration.
///
/// Count bounds are raw numbers: values in `(0, 1)` are fractions of the
/// variable pool, other values absolute counts. Normalization against the
/// pool happens when the generator is built.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Generator type.
    #[serde(rename = "type")]
    pub kind: GeneratorKind,

    /// Global bound conjoined with the first constraint of each trial
    /// (`at_least`, `iff`).
    #[serde(default)]
    pub global_at_most: Option<f64>,

    /// Fixed cardinality `k` (`at_least`, `at_most`); random per constraint if unset.
    #[serde(default)]
    pub cardinality: Option<f64>,

    #[serde(default = "default_one")]
    pub min_num_constraints: f64,

    #[serde(default = "default_one")]
    pub max_num_constraints: f64,

    #[serde(default = "default_two")]
    pub min_num_variables: f64,

    #[serde(default = "default_two")]
    pub max_num_variables: f64,

    /// Number of independent trials.
    #[serde(default = "default_repetitions")]
    pub num_repetitions: usize,

    /// Seed the random stream is reset to at the start of each run.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_one() -> f64 {
    1.0
}

fn default_two() -> f64 {
    2.0
}

fn default_repetitions() -> usize {
    1
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl GeneratorConfig {
    /// Creates a generator configuration with default settings.
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            global_at_most: None,
            cardinality: None,
            min_num_constraints: default_one(),
            max_num_constraints: default_one(),
            min_num_variables: default_two(),
            max_num_variables: default_two(),
            num_repetitions: default_repetitions(),
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_global_at_most(mut self, global_at_most: f64) -> Self {
        self.global_at_most = Some(global_at_most);
        self
    }

    pub fn with_cardinality(mut self, cardinality: f64) -> Self {
        self.cardinality = Some(cardinality);
        self
    }

    pub fn with_num_constraints(mut self, min: f64, max: f64) -> Self {
        self.min_num_constraints = min;
        self.max_num_constraints = max;
        self
    }

    pub fn with_num_variables(mut self, min: f64, max: f64) -> Self {
        self.min_num_variables = min;
        self.max_num_variables = max;
        self
    }

    pub fn with_num_repetitions(mut self, num_repetitions: usize) -> Self {
        self.num_repetitions = num_repetitions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let needs_global = matches!(self.kind, GeneratorKind::AtLeast | GeneratorKind::Iff);
        if needs_global && self.global_at_most.is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} generator requires global_at_most",
                self.kind
            )));
        }
        if self.kind == GeneratorKind::Xor
            && (self.min_num_variables != 2.0 || self.max_num_variables != 2.0)
        {
            return Err(ConfigError::Invalid(
                "xor generator samples exactly two variables".to_string(),
            ));
        }
        for (name, min, max) in [
            (
                "num_constraints",
                self.min_num_constraints,
                self.max_num_constraints,
            ),
            ("num_variables", self.min_num_variables, self.max_num_variables),
        ] {
            if min >= 1.0 && max >= 1.0 && min > max {
                return Err(ConfigError::Invalid(format!(
                    "min_{name} ({min}) exceeds max_{name} ({max})"
                )));
            }
        }
        Ok(())
    }
}

/// Evaluator configuration: the evaluator type plus its constructor arguments.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvaluatorConfig {
    /// No constraints, optimize only.
    None,
    GlobalAtMost {
        #[serde(default = "default_global_at_most")]
        global_at_most: usize,
    },
    QualityThreshold {
        threshold: f64,
    },
    CorrelationRemoval {
        /// Pairwise correlations, aligned with the variable order.
        matrix: Vec<Vec<f64>>,
        threshold: f64,
    },
    SelectSchmidGroup,
    SelectQuantitySchmidGroup,
    SelectSchmidGroupRepresentative,
    SelectQuantitySchmidGroupRepresentative,
    SelectWholeSlipSystems,
    SelectReactionType,
    SelectValueOrDelta,
    SelectStrainTensor,
    SelectDislocationDensity,
    SelectStrainRate,
    SelectAggregate,
    SelectQuantityAggregate,
    SelectAggregateOrOriginal,
}

fn default_global_at_most() -> usize {
    10
}

impl EvaluatorConfig {
    /// The `type` tag of this configuration.
    pub fn kind_name(&self) -> &'static str {
        match self {
            EvaluatorConfig::None => "none",
            EvaluatorConfig::GlobalAtMost { .. } => "global_at_most",
            EvaluatorConfig::QualityThreshold { .. } => "quality_threshold",
            EvaluatorConfig::CorrelationRemoval { .. } => "correlation_removal",
            EvaluatorConfig::SelectSchmidGroup => "select_schmid_group",
            EvaluatorConfig::SelectQuantitySchmidGroup => "select_quantity_schmid_group",
            EvaluatorConfig::SelectSchmidGroupRepresentative => {
                "select_schmid_group_representative"
            }
            EvaluatorConfig::SelectQuantitySchmidGroupRepresentative => {
                "select_quantity_schmid_group_representative"
            }
            EvaluatorConfig::SelectWholeSlipSystems => "select_whole_slip_systems",
            EvaluatorConfig::SelectReactionType => "select_reaction_type",
            EvaluatorConfig::SelectValueOrDelta => "select_value_or_delta",
            EvaluatorConfig::SelectStrainTensor => "select_strain_tensor",
            EvaluatorConfig::SelectDislocationDensity => "select_dislocation_density",
            EvaluatorConfig::SelectStrainRate => "select_strain_rate",
            EvaluatorConfig::SelectAggregate => "select_aggregate",
            EvaluatorConfig::SelectQuantityAggregate => "select_quantity_aggregate",
            EvaluatorConfig::SelectAggregateOrOriginal => "select_aggregate_or_original",
        }
    }
}

/// Solver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Maximum branch-and-bound nodes per optimization (None = unlimited).
    #[serde(default)]
    pub node_limit: Option<u64>,

    /// Monte Carlo iterations for evaluator solution-fraction estimates.
    #[serde(default = "default_estimate_iterations")]
    pub estimate_iterations: usize,
}

fn default_estimate_iterations() -> usize {
    DEFAULT_ESTIMATE_ITERATIONS
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            estimate_iterations: DEFAULT_ESTIMATE_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests;
