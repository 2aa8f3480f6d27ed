//! Approximate equality for floating-point values and vectors.
//!
//! [`Vector`][crate::Vector]'s [`PartialEq`] impl compares elements exactly. Results of chained
//! arithmetic are rarely bit-identical, so tests and callers comparing computed vectors should use
//! [`ApproxEq`] or the [`assert_approx_eq!`][crate::assert_approx_eq] macro instead.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Sequences (slices, arrays, vectors) are approximately equal if they have the same length and
/// all corresponding elements are approximately equal.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance passed to absolute and relative comparisons.
    ///
    /// This is [`f32`] or [`f64`], matching the primitive type being compared.
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if the absolute difference of the values is at most `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if the absolute difference of the values is at most `rel_tolerance` times
    /// the larger of their magnitudes.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable values lie between the compared
    /// values ([*units in the last place*]).
    ///
    /// `NaN` is never equal to anything. `-0.0` and `+0.0` are equal, other values with differing
    /// signs are not.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances of an [`ApproxEq::Tolerance`] type.
///
/// Used by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne] when no comparison is configured.
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for *ULPs comparisons* via [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select the comparisons to perform; the values are
/// considered equal if *any* selected comparison says so.
///
/// Without explicit configuration, an absolute comparison with [`DEFAULT_ABS_TOLERANCE`] and a
/// relative comparison with [`DEFAULT_REL_TOLERANCE`] are performed.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compare the absolute difference of the values against `abs`.
    ///
    /// Suited for values close to zero, which may have opposing signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compare the difference of the values relative to their magnitude against `rel`.
    ///
    /// Suited for values that aren't close to zero. Any non-zero value only compares equal to 0.0
    /// with a relative tolerance of at least 1.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compare the number of representable floats between the values against `ulps`.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let (left, right) = (self.left, self.right);
        self.abs.map_or(false, |abs| T::abs_diff_eq(left, right, abs))
            || self.rel.map_or(false, |rel| T::rel_diff_eq(left, right, rel))
            || self.ulps.map_or(false, |ulps| T::ulps_diff_eq(left, right, ulps))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    // `#[track_caller]` has no effect on destructors, so the location recorded in `new` is
    // reported instead.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(<T::Tolerance as DefaultTolerances>::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(<T::Tolerance as DefaultTolerances>::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed && !std::thread::panicking() {
            assert_failed_inner(&self.left, &self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to pick the kind of
/// comparison and its tolerance.
///
/// # Examples
///
/// ```
/// # use evec_linalg::*;
/// let sum = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(sum, 1.0);
///
/// let unit = Vector::from([3.0, 4.0]).normalize()?;
/// assert_approx_eq!(unit, Vector::from([0.6, 0.8]));
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// # Ok::<(), Error>(())
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using
/// [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use evec_linalg::*;
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(Vector::new(2), Vector::new(3));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
