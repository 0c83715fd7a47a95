//! Generic variable pool fixtures.

/// Index-aligned variable names and qualities.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub names: Vec<String>,
    pub qualities: Vec<f64>,
}

impl Fixture {
    /// `n` variables named `x_0..x_{n-1}` with qualities `n, n-1, ..., 1`.
    ///
    /// Integer qualities keep objective sums exact.
    pub fn numbered(n: usize) -> Self {
        Self::from_names((0..n).map(|i| format!("x_{i}")))
    }

    /// Variables named `x_i` with the given qualities.
    pub fn with_qualities(qualities: &[f64]) -> Self {
        Self {
            names: (0..qualities.len()).map(|i| format!("x_{i}")).collect(),
            qualities: qualities.to_vec(),
        }
    }

    /// Variables with the given names; qualities descend from `n` to 1.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let n = names.len();
        Self {
            qualities: (0..n).map(|i| (n - i) as f64).collect(),
            names,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.names, self.qualities)
    }
}
