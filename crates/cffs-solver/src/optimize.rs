//! Branch-and-bound quality maximization.
//!
//! Variables are decided in descending quality order, selected-first for
//! positive qualities. A branch is pruned when the constraints are violated or
//! when its optimistic bound (current objective plus every remaining positive
//! quality) cannot beat the best complete selection found so far.

use cffs_core::{Expr, Variable};

use crate::counting::conjunction_status;

/// Configuration for the branch-and-bound search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Maximum number of nodes to explore (None = unlimited).
    pub node_limit: Option<u64>,
}

/// Result of one branch-and-bound search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best selection found, `None` if the constraints are unsatisfiable
    /// (or no complete selection was reached before the node limit).
    pub selection: Option<Vec<bool>>,
    /// Summed quality of `selection`.
    pub objective_value: f64,
    /// Whether the whole tree was explored.
    pub optimal: bool,
    pub nodes_explored: u64,
}

impl SearchOutcome {
    pub fn is_satisfiable(&self) -> bool {
        self.selection.is_some()
    }

    pub fn num_selected(&self) -> usize {
        self.selection
            .as_ref()
            .map_or(0, |s| s.iter().filter(|&&b| b).count())
    }
}

/// Depth-first branch-and-bound over variable selections.
pub struct BranchAndBound<'a> {
    constraints: &'a [Expr],
    qualities: Vec<f64>,
    order: Vec<usize>,
    /// `remaining_gain[d]` = sum of positive qualities of `order[d..]`.
    remaining_gain: Vec<f64>,
    config: SearchConfig,
    assignment: Vec<Option<bool>>,
    best: Option<(f64, Vec<bool>)>,
    nodes_explored: u64,
    truncated: bool,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(variables: &[Variable], constraints: &'a [Expr], config: SearchConfig) -> Self {
        let qualities: Vec<f64> = variables.iter().map(Variable::quality).collect();
        let mut order: Vec<usize> = (0..qualities.len()).collect();
        order.sort_by(|&a, &b| qualities[b].total_cmp(&qualities[a]).then(a.cmp(&b)));

        let mut remaining_gain = vec![0.0; order.len() + 1];
        for depth in (0..order.len()).rev() {
            remaining_gain[depth] = remaining_gain[depth + 1] + qualities[order[depth]].max(0.0);
        }

        Self {
            constraints,
            assignment: vec![None; qualities.len()],
            qualities,
            order,
            remaining_gain,
            config,
            best: None,
            nodes_explored: 0,
            truncated: false,
        }
    }

    /// Runs the search to completion (or to the node limit).
    pub fn solve(mut self) -> SearchOutcome {
        self.search(0, 0.0);
        let optimal = !self.truncated;
        match self.best {
            Some((objective_value, selection)) => SearchOutcome {
                selection: Some(selection),
                objective_value,
                optimal,
                nodes_explored: self.nodes_explored,
            },
            None => SearchOutcome {
                selection: None,
                objective_value: 0.0,
                optimal,
                nodes_explored: self.nodes_explored,
            },
        }
    }

    fn optimistic_bound(&self, depth: usize, objective: f64) -> f64 {
        objective + self.remaining_gain[depth]
    }

    fn search(&mut self, depth: usize, objective: f64) {
        if self.truncated {
            return;
        }
        if let Some(limit) = self.config.node_limit {
            if self.nodes_explored >= limit {
                self.truncated = true;
                return;
            }
        }
        self.nodes_explored += 1;

        let status = conjunction_status(self.constraints, &self.assignment);
        if status == Some(false) {
            return;
        }
        let bound = self.optimistic_bound(depth, objective);
        if let Some((best_value, _)) = &self.best {
            if bound <= *best_value {
                return;
            }
        }
        if status == Some(true) {
            // Every completion is feasible: take all remaining positive qualities.
            self.record_completion(depth, bound);
            return;
        }

        let Some(&id) = self.order.get(depth) else {
            return;
        };
        let quality = self.qualities[id];
        let choices = if quality > 0.0 {
            [true, false]
        } else {
            [false, true]
        };
        for selected in choices {
            self.assignment[id] = Some(selected);
            let gained = if selected { quality } else { 0.0 };
            self.search(depth + 1, objective + gained);
        }
        self.assignment[id] = None;
    }

    fn record_completion(&mut self, depth: usize, objective: f64) {
        let mut selection: Vec<bool> = self
            .assignment
            .iter()
            .map(|slot| slot.unwrap_or(false))
            .collect();
        for &id in &self.order[depth..] {
            selection[id] = self.qualities[id] > 0.0;
        }
        self.best = Some((objective, selection));
    }
}
