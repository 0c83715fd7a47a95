//! Cardinality normalization.
//!
//! Experiment parameters may be given relative to the variable pool
//! (`0.25` = a quarter of the variables), as absolute counts, or left unset.
//! [`Cardinality::normalize`] turns each into a validated absolute bound.

use crate::error::{CffsError, Result};

/// A possibly relative, possibly unset cardinality.
///
/// # Examples
///
/// ```
/// use cffs_core::Cardinality;
///
/// assert_eq!(Cardinality::from(0.5).resolve(10).unwrap(), 5);
/// assert_eq!(Cardinality::from(3usize).resolve(10).unwrap(), 3);
/// assert_eq!(Cardinality::Unset.resolve(10).unwrap(), 10);
/// assert_eq!(Cardinality::Unset.normalize(10, true).unwrap(), None);
/// assert!(Cardinality::from(11usize).resolve(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cardinality {
    /// No value given.
    #[default]
    Unset,
    /// A fraction of the pool, strictly between 0 and 1.
    Relative(f64),
    /// An absolute count.
    Absolute(i64),
}

impl Cardinality {
    /// Resolves to an absolute bound in `[1, pool_size]`.
    ///
    /// - `Unset` yields `None` if `pass_unset` is set, the pool size otherwise.
    /// - A value in `(0, 1)` is multiplied by the pool size and rounded to the
    ///   nearest integer, ties to even.
    /// - Anything else is used as an absolute count (fractional part dropped).
    ///
    /// # Errors
    ///
    /// [`CffsError::CardinalityOutOfRange`] if the bound falls outside
    /// `[1, pool_size]`.
    pub fn normalize(self, pool_size: usize, pass_unset: bool) -> Result<Option<usize>> {
        let value = match self {
            Cardinality::Unset if pass_unset => return Ok(None),
            Cardinality::Unset => pool_size as i64,
            Cardinality::Relative(fraction) if fraction > 0.0 && fraction < 1.0 => {
                (fraction * pool_size as f64).round_ties_even() as i64
            }
            Cardinality::Relative(value) => value as i64,
            Cardinality::Absolute(count) => count,
        };
        if value < 1 || value > pool_size as i64 {
            return Err(CffsError::CardinalityOutOfRange {
                value,
                max: pool_size,
            });
        }
        Ok(Some(value as usize))
    }

    /// Resolves to an absolute bound, treating `Unset` as the full pool.
    pub fn resolve(self, pool_size: usize) -> Result<usize> {
        self.normalize(pool_size, false)
            .map(|bound| bound.unwrap_or(pool_size))
    }
}

impl From<f64> for Cardinality {
    fn from(value: f64) -> Self {
        if value > 0.0 && value < 1.0 {
            Cardinality::Relative(value)
        } else {
            Cardinality::Absolute(value as i64)
        }
    }
}

impl From<usize> for Cardinality {
    fn from(value: usize) -> Self {
        Cardinality::Absolute(value as i64)
    }
}

impl<T: Into<Cardinality>> From<Option<T>> for Cardinality {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cardinality::Unset, Into::into)
    }
}
