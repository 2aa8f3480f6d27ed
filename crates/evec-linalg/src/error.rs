//! Errors reported by fallible [`Vector`][crate::Vector] operations.

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The ways an operation on a [`Vector`][crate::Vector] can fail.
///
/// Every variant is recoverable. The vector an operation was invoked on is left unchanged when an
/// error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operands of a binary operation have different dimensions.
    #[error("dimensions of LHS({lhs}) and RHS({rhs}) do not match")]
    DimensionMismatch {
        /// Dimension of the left-hand operand.
        lhs: usize,
        /// Dimension of the right-hand operand.
        rhs: usize,
    },

    /// A checked element access used an index outside of `0..dimension`.
    #[error("index {index} is not valid for this vector of dimension {dimension}")]
    DimensionIndex { index: usize, dimension: usize },

    /// A vector was divided by exactly zero.
    #[error("invalid vector division by 0")]
    DivisionByZero,

    /// The norm of a vector with no dimensions was requested.
    #[error("vector with no dimensions does not have a norm")]
    EmptyVector,

    /// A vector whose norm is 0 was normalized.
    #[error("vector with euclidean norm of 0 does not have a unit vector")]
    ZeroNorm,
}

impl Error {
    /// Checks that two operand dimensions agree, returning [`Error::DimensionMismatch`] otherwise.
    pub(crate) fn check_dimensions(lhs: usize, rhs: usize) -> Result<()> {
        if lhs == rhs {
            Ok(())
        } else {
            log::debug!("rejecting operation on vectors of dimension {lhs} and {rhs}");
            Err(Error::DimensionMismatch { lhs, rhs })
        }
    }

    /// Checks that `divisor` is usable for scalar division.
    pub(crate) fn check_divisor(divisor: f64) -> Result<()> {
        if divisor == 0.0 {
            log::debug!("rejecting vector division by {divisor}");
            Err(Error::DivisionByZero)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::DimensionMismatch { lhs: 2, rhs: 4 }.to_string(),
            "dimensions of LHS(2) and RHS(4) do not match"
        );
        assert_eq!(
            Error::DimensionIndex {
                index: 2,
                dimension: 2
            }
            .to_string(),
            "index 2 is not valid for this vector of dimension 2"
        );
        assert_eq!(Error::DivisionByZero.to_string(), "invalid vector division by 0");
    }

    #[test]
    fn checks() {
        assert_eq!(Error::check_dimensions(3, 3), Ok(()));
        assert_eq!(
            Error::check_dimensions(3, 1),
            Err(Error::DimensionMismatch { lhs: 3, rhs: 1 })
        );
        assert_eq!(Error::check_divisor(0.5), Ok(()));
        assert_eq!(Error::check_divisor(0.0), Err(Error::DivisionByZero));
        assert_eq!(Error::check_divisor(-0.0), Err(Error::DivisionByZero));
    }
}
