//! Dimension-generic point abstraction.
//!
//! The fitter never looks at named coordinates; it loops over axis
//! indices `0..DIM`. Any type that can hand out and be rebuilt from its
//! coordinates can be fitted.

use core::fmt::Debug;
use lerp::Lerp;
use num_traits::{Float, FromPrimitive, Zero};

/// Scalar types the fitter works with (`f32`, `f64`).
pub trait Scalar: Float + FromPrimitive + Lerp<Self> + Debug {}

impl<T> Scalar for T where T: Float + FromPrimitive + Lerp<T> + Debug {}

/// A point with a fixed number of real coordinates.
///
/// Implemented for `[T; D]`. Wrap foreign point types (e.g. from
/// `nalgebra` or `glam`) in a newtype to fit them directly.
pub trait CurvePoint: Copy {
    /// The coordinate type.
    type Scalar: Scalar;

    /// Number of coordinates.
    const DIM: usize;

    /// Returns the coordinate along `axis` (`0..DIM`).
    fn coord(&self, axis: usize) -> Self::Scalar;

    /// Builds a point by asking `f` for every axis in order.
    fn from_coords<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Self::Scalar;
}

impl<T: Scalar, const D: usize> CurvePoint for [T; D] {
    type Scalar = T;
    const DIM: usize = D;

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    #[inline]
    fn from_coords<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        core::array::from_fn(f)
    }
}

/// Converts a count into `T`. Lossless for every count `f32`/`f64` can
/// represent.
#[inline]
pub(crate) fn from_count<T: Scalar>(n: usize) -> T {
    T::from_usize(n).unwrap_or_else(T::nan)
}

/// Euclidean distance between `a` and `b`.
pub fn distance<P: CurvePoint>(a: &P, b: &P) -> P::Scalar {
    (0..P::DIM)
        .fold(P::Scalar::zero(), |sum, axis| {
            let delta = a.coord(axis) - b.coord(axis);
            sum + delta * delta
        })
        .sqrt()
}

/// `true` if every coordinate of `a` and `b` is within `epsilon`.
pub fn approx_eq<P: CurvePoint>(a: &P, b: &P, epsilon: P::Scalar) -> bool {
    (0..P::DIM).all(|axis| (a.coord(axis) - b.coord(axis)).abs() <= epsilon)
}

/// `true` if `a` and `b` are coordinate-for-coordinate identical.
pub fn exactly_eq<P: CurvePoint>(a: &P, b: &P) -> bool {
    (0..P::DIM).all(|axis| a.coord(axis) == b.coord(axis))
}

/// Unit vector pointing from `from` to `to`, or `None` if the two points
/// coincide (or the length is not finite).
pub fn unit_direction<P: CurvePoint>(from: &P, to: &P) -> Option<P> {
    let length = distance(from, to);
    if !length.is_finite() || length <= P::Scalar::epsilon() {
        return None;
    }
    Some(P::from_coords(|axis| {
        (to.coord(axis) - from.coord(axis)) / length
    }))
}
