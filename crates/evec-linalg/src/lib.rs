//! Dense Euclidean vectors with a dimension chosen at runtime.
//!
//! The central type is [`Vector`], a mutable vector of [`f64`] elements backed by a single,
//! exclusively owned allocation. Its dimension is fixed once it has been created.
//!
//! # Error Handling
//!
//! Operations that are not defined for every input return a [`Result`] instead of panicking:
//!
//! - Binary operations on vectors of different dimensions fail with
//!   [`Error::DimensionMismatch`].
//! - Checked element access ([`Vector::at`]) fails with [`Error::DimensionIndex`].
//! - Division by zero fails with [`Error::DivisionByZero`].
//! - The norm of an empty vector fails with [`Error::EmptyVector`], and normalizing a vector of
//!   norm 0 fails with [`Error::ZeroNorm`].
//!
//! A failed operation never modifies its operands.
//!
//! # Examples
//!
//! ```
//! # use evec_linalg::*;
//! let a = Vector::from([5.0, 4.0]);
//! let b = Vector::from([4.0, 5.0]);
//! assert_ne!(a, b);
//! assert_eq!(a.norm()?, b.norm()?);
//!
//! let sum = (&a + &b)?;
//! assert_eq!(sum.to_string(), "[9 9]");
//!
//! let err = (&a + &Vector::new(4)).unwrap_err();
//! assert_eq!(err, Error::DimensionMismatch { lhs: 2, rhs: 4 });
//! # Ok::<(), Error>(())
//! ```

pub mod approx;
mod error;
mod vector;

pub use error::*;
pub use vector::*;
