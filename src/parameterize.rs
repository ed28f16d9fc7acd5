//! Arc-length parameterization of a point sequence.

use crate::point::{approx_eq, distance, CurvePoint};
use num_traits::Zero;

/// A working copy of the input points together with their cumulative
/// arc-length.
#[derive(Clone, Debug)]
pub struct Parameterization<P: CurvePoint> {
    /// The points the curve passes through, possibly with a copy of the
    /// first point appended to close the loop.
    pub points: Vec<P>,
    /// `distances[i]` is the polyline length from `points[0]` to
    /// `points[i]`.
    pub distances: Vec<P::Scalar>,
    /// `true` if a closing point was appended.
    pub closing_point_appended: bool,
}

/// Cumulative Euclidean length along `points`.
///
/// The result has the same length as `points`, starts at zero and never
/// decreases. An empty slice yields an empty array.
pub fn arc_lengths<P: CurvePoint>(points: &[P]) -> Vec<P::Scalar> {
    let mut distances = Vec::with_capacity(points.len());
    let mut total = P::Scalar::zero();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total = total + distance(point, &points[i - 1]);
        }
        distances.push(total);
    }
    distances
}

/// Parameterizes `points` by arc-length.
///
/// If `closed` is set and the first and last point differ by more than
/// `epsilon` along any axis, a copy of the first point is appended to the
/// working copy. `points` itself is never touched.
pub fn parameterize<P: CurvePoint>(
    points: &[P],
    closed: bool,
    epsilon: P::Scalar,
) -> Parameterization<P> {
    let mut working = points.to_vec();
    let mut closing_point_appended = false;

    if closed {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if !approx_eq(first, last, epsilon) {
                working.push(*first);
                closing_point_appended = true;
            }
        }
    }

    let distances = arc_lengths(&working);
    Parameterization {
        points: working,
        distances,
        closing_point_appended,
    }
}

/// Drops every point that repeats its predecessor within `epsilon`.
///
/// Zero-length segments give identical start and end interpolation
/// equations, which makes the per-axis system singular.
pub fn collapse_duplicates<P: CurvePoint>(
    points: &[P],
    epsilon: P::Scalar,
) -> Vec<P> {
    let mut kept: Vec<P> = Vec::with_capacity(points.len());
    for point in points {
        match kept.last() {
            Some(last) if approx_eq(last, point, epsilon) => {}
            _ => kept.push(*point),
        }
    }
    kept
}
