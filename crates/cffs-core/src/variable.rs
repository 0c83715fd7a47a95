//! Selectable feature variables.

use crate::expr::Expr;

/// A named, selectable feature with a quality score.
///
/// Variables are created once by the [`Problem`](crate::Problem) that owns
/// them and never change afterwards. The `id` is the variable's position in
/// the problem's pool and is what constraint leaves refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    id: usize,
    name: String,
    quality: f64,
}

impl Variable {
    pub fn new(id: usize, name: impl Into<String>, quality: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quality,
        }
    }

    /// Position of the variable in its problem's pool.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Objective contribution when the variable is selected.
    pub fn quality(&self) -> f64 {
        self.quality
    }

    /// Leaf expression: "this variable is selected".
    pub fn expr(&self) -> Expr {
        Expr::Var(self.id)
    }
}
