//! Error type returned by the fallible `try_*` vector operations.

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Ways a vector operation can reject its inputs.
///
/// The plain (non-`try_`) methods on [`Vector`][crate::Vector] panic with the [`Display`] text of
/// these errors instead of returning them.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    /// The operands of a binary operation have different dimensions.
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The cross product was requested for vectors that aren't both 3-dimensional.
    #[error("cross product requires two 3-dimensional vectors, got {lhs} and {rhs}")]
    NotThreeDimensional { lhs: usize, rhs: usize },

    /// A vector with (near-)zero magnitude was used where a direction is needed.
    #[error("vector has zero magnitude")]
    ZeroMagnitude,

    /// A string could not be parsed as a vector.
    #[error("invalid vector syntax: {0}")]
    Parse(String),
}

impl VectorError {
    /// Returns an error if `expected != actual`.
    pub(crate) fn check_dims(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            VectorError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "vector dimension mismatch: expected 3, got 2"
        );
        assert_eq!(
            VectorError::NotThreeDimensional { lhs: 2, rhs: 3 }.to_string(),
            "cross product requires two 3-dimensional vectors, got 2 and 3"
        );
        assert_eq!(
            VectorError::ZeroMagnitude.to_string(),
            "vector has zero magnitude"
        );
    }

    #[test]
    fn check_dims() {
        assert_eq!(VectorError::check_dims(4, 4), Ok(()));
        assert_eq!(
            VectorError::check_dims(4, 1),
            Err(VectorError::DimensionMismatch {
                expected: 4,
                actual: 1
            })
        );
    }
}
