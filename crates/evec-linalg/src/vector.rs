use std::{fmt, mem, slice, vec};

use itertools::Itertools;

use crate::error::{Error, Result};

mod ops;

/// A dense vector of [`f64`] elements whose dimension is fixed when it is created.
///
/// The elements live in a single heap allocation that is exclusively owned by the [`Vector`].
/// The allocation is never resized: every operation either preserves the dimension or produces a
/// new [`Vector`].
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - [`Vector::new`] creates a vector of the given dimension with all elements set to 0.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::from_slice`], the [`From`] impls for slices, arrays and [`Vec`], and the
///   [`FromIterator`] impl copy an existing sequence of values.
/// - The [`Default`] implementation creates the empty vector with dimension 0.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on slices. Out-of-range indices
///   are a bug in the caller and will panic.
/// - [`Vector::at`] and [`Vector::at_mut`] check the index and return
///   [`Error::DimensionIndex`] instead of panicking.
/// - [`Vector::as_slice`], [`Vector::iter`] and their mutable counterparts expose the elements.
///
/// # Arithmetic
///
/// Operations that require both operands to have the same dimension, or that are undefined for
/// some inputs, return a [`Result`]. This includes the `+`, `-` and `/` operators, as well as `*`
/// between two vectors (the dot product). Compound assignment with a fallible outcome is provided
/// through the `try_*_assign` methods, which leave `self` untouched on error. Scaling by a
/// scalar (`*`, `*=`) and negation cannot fail.
///
/// # Ownership
///
/// [`Clone`] performs a deep copy. Moving a [`Vector`] transfers its buffer without copying.
/// [`Vector::take`] moves the buffer out of a place that stays usable, leaving the empty vector
/// behind.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Default, PartialEq)]
pub struct Vector(Box<[f64]>);

impl Vector {
    /// Creates a vector with `dimension` elements, all initialized to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let v = Vector::new(3);
    /// assert_eq!(v.dimension(), 3);
    /// assert_eq!(v, [0.0, 0.0, 0.0]);
    /// ```
    #[inline]
    pub fn new(dimension: usize) -> Self {
        Self::splat(dimension, 0.0)
    }

    /// Creates a vector with `dimension` elements, each initialized to `magnitude`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let v = Vector::splat(2, 1.5);
    /// assert_eq!(v, [1.5, 1.5]);
    /// ```
    pub fn splat(dimension: usize, magnitude: f64) -> Self {
        Self(vec![magnitude; dimension].into_boxed_slice())
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let v = Vector::from_fn(3, |i| i as f64 * 10.0);
    /// assert_eq!(v, [0.0, 10.0, 20.0]);
    /// ```
    pub fn from_fn<F>(dimension: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        (0..dimension).map(cb).collect()
    }

    /// Creates a vector holding a copy of `values`.
    ///
    /// The returned vector does not borrow from `values`.
    #[inline]
    pub fn from_slice(values: &[f64]) -> Self {
        Self(values.into())
    }

    /// Moves the contents out of `self`, leaving the empty vector in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let mut a = Vector::from([1.0, 2.0]);
    /// let b = a.take();
    /// assert_eq!(a.dimension(), 0);
    /// assert_eq!(b, [1.0, 2.0]);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns the number of elements in this vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this vector has dimension 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the element at index `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionIndex`] if `n` is not less than [`Vector::dimension`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let v = Vector::from([1.0, 2.0]);
    /// assert_eq!(v.at(1), Ok(2.0));
    /// assert_eq!(v.at(2), Err(Error::DimensionIndex { index: 2, dimension: 2 }));
    /// ```
    pub fn at(&self, n: usize) -> Result<f64> {
        self.0.get(n).copied().ok_or(Error::DimensionIndex {
            index: n,
            dimension: self.dimension(),
        })
    }

    /// Returns a mutable reference to the element at index `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionIndex`] if `n` is not less than [`Vector::dimension`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let mut v = Vector::new(2);
    /// *v.at_mut(0)? = 4.0;
    /// assert_eq!(v, [4.0, 0.0]);
    /// assert!(v.at_mut(5).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn at_mut(&mut self, n: usize) -> Result<&mut f64> {
        let dimension = self.dimension();
        self.0.get_mut(n).ok_or(Error::DimensionIndex {
            index: n,
            dimension,
        })
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// The slice cannot be used to change the dimension of the vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, f64> {
        self.0.iter_mut()
    }

    /// Copies the elements into a new [`Vec`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let v = Vector::splat(2, 7.0);
    /// let values = v.to_vec();
    /// drop(v);
    /// assert_eq!(values, vec![7.0, 7.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Converts this [`Vector`] into its underlying boxed slice without copying.
    #[inline]
    pub fn into_boxed_slice(self) -> Box<[f64]> {
        self.0
    }

    /// Applies a closure to each element, returning a new vector of the same dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let v = Vector::from([1.0, -2.0]).map(f64::abs);
    /// assert_eq!(v, [1.0, 2.0]);
    /// ```
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        self.iter().copied().map(f).collect()
    }

    /// Adds `rhs` to `self`, element by element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ. `self` is not modified in
    /// that case.
    pub fn try_add_assign(&mut self, rhs: &Vector) -> Result<()> {
        self.zip_apply(rhs, |lhs, rhs| *lhs += rhs)
    }

    /// Subtracts `rhs` from `self`, element by element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ. `self` is not modified in
    /// that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let mut a = Vector::from([5.0, 5.0]);
    /// a.try_sub_assign(&Vector::from([1.0, 2.0]))?;
    /// assert_eq!(a, [4.0, 3.0]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_sub_assign(&mut self, rhs: &Vector) -> Result<()> {
        self.zip_apply(rhs, |lhs, rhs| *lhs -= rhs)
    }

    /// Divides every element of `self` by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `divisor` is zero. `self` is not modified in that
    /// case.
    pub fn try_div_assign(&mut self, divisor: f64) -> Result<()> {
        Error::check_divisor(divisor)?;
        self.iter_mut().for_each(|elem| *elem /= divisor);
        Ok(())
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// This is also available as the `*` operator between two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let a = Vector::from([1.0, 3.0, -5.0]);
    /// let b = Vector::from([4.0, -2.0, -1.0]);
    /// assert_eq!(a.dot(&b), Ok(3.0));
    /// assert!(a.dot(&Vector::new(2)).is_err());
    /// ```
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        Error::check_dimensions(self.dimension(), other.dimension())?;
        Ok(self
            .iter()
            .zip(other)
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }

    /// Returns the Euclidean norm (the length) of this vector.
    ///
    /// # Errors
    ///
    /// A vector with no dimensions does not have a norm; [`Error::EmptyVector`] is returned for
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// assert_eq!(Vector::from([3.0, 4.0]).norm(), Ok(5.0));
    /// assert_eq!(Vector::new(0).norm(), Err(Error::EmptyVector));
    /// ```
    pub fn norm(&self) -> Result<f64> {
        if self.is_empty() {
            log::debug!("norm requested for a vector with no dimensions");
            return Err(Error::EmptyVector);
        }
        Ok(self.dot(self)?.sqrt())
    }

    /// Divides this vector by its norm, returning a unit vector pointing in the same direction.
    ///
    /// `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVector`] if `self` has no dimensions, and [`Error::ZeroNorm`] if its
    /// norm is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evec_linalg::*;
    /// let v = Vector::from([0.0, 0.0, 4.0]);
    /// assert_eq!(v.normalize()?, [0.0, 0.0, 1.0]);
    /// assert_eq!(Vector::new(2).normalize(), Err(Error::ZeroNorm));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn normalize(&self) -> Result<Vector> {
        let norm = self.norm()?;
        if norm == 0.0 {
            log::debug!("cannot normalize {self}: norm is 0");
            return Err(Error::ZeroNorm);
        }
        log::trace!("normalizing {self} with norm {norm}");
        self / norm
    }

    /// Element-wise combination of two vectors of equal dimension into a new vector.
    pub(crate) fn zip_map<F>(&self, rhs: &Vector, mut f: F) -> Result<Vector>
    where
        F: FnMut(f64, f64) -> f64,
    {
        Error::check_dimensions(self.dimension(), rhs.dimension())?;
        Ok(self.iter().zip(rhs).map(|(&l, &r)| f(l, r)).collect())
    }

    /// In-place variant of [`Vector::zip_map`].
    fn zip_apply<F>(&mut self, rhs: &Vector, mut f: F) -> Result<()>
    where
        F: FnMut(&mut f64, f64),
    {
        Error::check_dimensions(self.dimension(), rhs.dimension())?;
        self.iter_mut().zip(rhs).for_each(|(l, &r)| f(l, r));
        Ok(())
    }
}

impl Clone for Vector {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        if self.dimension() == source.dimension() {
            self.0.copy_from_slice(&source.0);
        } else {
            *self = source.clone();
        }
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        Self(values.into_boxed_slice())
    }
}

impl From<Box<[f64]>> for Vector {
    #[inline]
    fn from(values: Box<[f64]>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Vector {
    #[inline]
    fn from(values: &[f64]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(values: [f64; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.0.into_vec()
    }
}

impl From<&Vector> for Vec<f64> {
    #[inline]
    fn from(value: &Vector) -> Self {
        value.to_vec()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Vector {
    type Item = &'a mut f64;
    type IntoIter = slice::IterMut<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl AsRef<[f64]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl AsMut<[f64]> for Vector {
    #[inline]
    fn as_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as `[x0 x1 ... xn]`.
///
/// Formatting parameters such as the precision are applied to every element. This format is meant
/// for diagnostics and cannot be parsed back.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt::Display::fmt(&self.iter().format(" "), f)?;
        f.write_str("]")
    }
}
