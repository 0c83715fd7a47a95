//! In-memory selection problem.

use cffs_core::{CffsError, EvaluationRecord, Expr, ExperimentRng, Problem, Result, Variable};
use tracing::{debug, warn};

use crate::counting::{estimate_fraction, exact_fraction};
use crate::optimize::{BranchAndBound, SearchConfig};

/// A pool of named, quality-weighted variables plus a transient constraint set.
///
/// # Example
///
/// ```
/// use cffs_core::{Expr, Problem};
/// use cffs_solver::SelectionProblem;
///
/// let mut problem = SelectionProblem::new(["a", "b", "c"], vec![0.5, 0.3, 0.2]).unwrap();
/// let at_most_one = Expr::count_at_most(problem.variables(), 1);
/// problem.add_constraint(at_most_one).unwrap();
///
/// assert_eq!(problem.compute_solution_fraction().unwrap(), 0.5);
/// let result = problem.optimize().unwrap();
/// assert_eq!(result.get("objective_value"), Some(0.5));
/// assert_eq!(result.get("num_selected"), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct SelectionProblem {
    variables: Vec<Variable>,
    constraints: Vec<Expr>,
    search_config: SearchConfig,
    last_selection: Option<Vec<bool>>,
}

impl SelectionProblem {
    /// Creates a problem from index-aligned names and qualities.
    ///
    /// # Errors
    ///
    /// [`CffsError::LengthMismatch`] if the lengths differ.
    pub fn new<I, S>(names: I, qualities: Vec<f64>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != qualities.len() {
            return Err(CffsError::LengthMismatch {
                variables: names.len(),
                qualities: qualities.len(),
            });
        }
        let variables = names
            .into_iter()
            .zip(qualities)
            .enumerate()
            .map(|(id, (name, quality))| Variable::new(id, name, quality))
            .collect();
        Ok(Self {
            variables,
            constraints: Vec::new(),
            search_config: SearchConfig::default(),
            last_selection: None,
        })
    }

    /// Caps the number of branch-and-bound nodes per [`optimize`](Problem::optimize) call.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.search_config.node_limit = Some(node_limit);
        self
    }

    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.search_config = config;
        self
    }

    pub fn constraints(&self) -> &[Expr] {
        &self.constraints
    }

    /// Variables selected by the most recent [`optimize`](Problem::optimize) call.
    pub fn selected_variables(&self) -> Vec<&Variable> {
        match &self.last_selection {
            Some(selection) => self
                .variables
                .iter()
                .zip(selection)
                .filter_map(|(v, &selected)| selected.then_some(v))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Problem for SelectionProblem {
    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn add_constraint(&mut self, constraint: Expr) -> Result<()> {
        if let Some(id) = constraint.max_variable() {
            if id >= self.variables.len() {
                return Err(CffsError::UnknownVariable(id));
            }
        }
        self.constraints.push(constraint);
        Ok(())
    }

    fn clear_constraints(&mut self) {
        self.constraints.clear();
    }

    fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    fn optimize(&mut self) -> Result<EvaluationRecord> {
        let outcome =
            BranchAndBound::new(&self.variables, &self.constraints, self.search_config.clone())
                .solve();
        if !outcome.optimal {
            warn!(
                event = "node_limit_reached",
                nodes_explored = outcome.nodes_explored,
            );
        }
        debug!(
            event = "optimize_end",
            objective_value = outcome.objective_value,
            num_selected = outcome.num_selected(),
            nodes_explored = outcome.nodes_explored,
        );

        let record = EvaluationRecord::new()
            .with("objective_value", outcome.objective_value)
            .with("num_selected", outcome.num_selected() as f64)
            .with("satisfiable", if outcome.is_satisfiable() { 1.0 } else { 0.0 })
            .with("optimal", if outcome.optimal { 1.0 } else { 0.0 })
            .with("nodes_explored", outcome.nodes_explored as f64);
        self.last_selection = outcome.selection;
        Ok(record)
    }

    fn compute_solution_fraction(&self) -> Result<f64> {
        Ok(exact_fraction(&self.constraints, self.variables.len()))
    }

    fn estimate_solution_fraction(
        &self,
        iterations: usize,
        rng: &mut ExperimentRng,
    ) -> Result<f64> {
        estimate_fraction(&self.constraints, self.variables.len(), iterations, rng)
    }
}
