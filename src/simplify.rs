//! Lossy removal of collinear points from a resampled curve.

use crate::point::{approx_eq, exactly_eq, unit_direction, CurvePoint};

/// Post-processing applied to the resampled points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Simplification {
    /// Return every resampled point.
    #[default]
    None,
    /// Drop interior points lying on a straight line, see
    /// [`simplify_linear()`].
    Linear,
}

/// Removes interior points that lie on a straight line between their
/// neighbours.
///
/// The scan walks left to right remembering the last kept point. A point
/// is dropped if the direction from the last kept point to it matches the
/// direction from it to the next point within `epsilon` on every axis.
/// The first and last point, and any point equal to one of `keep`, are
/// always retained.
///
/// # Examples
/// ```
/// use arclength_splines::simplify_linear;
///
/// let points = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [2.0, 2.0]];
/// let simplified = simplify_linear(&points, &[], 0.01);
/// assert_eq!(simplified, vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
/// ```
pub fn simplify_linear<P: CurvePoint>(
    points: &[P],
    keep: &[P],
    epsilon: P::Scalar,
) -> Vec<P> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut simplified = Vec::with_capacity(points.len());
    let mut last_kept = points[0];
    simplified.push(last_kept);

    for window in points.windows(3) {
        let (current, next) = (window[1], window[2]);

        let must_keep = keep.iter().any(|point| exactly_eq(point, &current));
        let redundant = !must_keep
            && match (
                unit_direction(&last_kept, &current),
                unit_direction(&current, &next),
            ) {
                // Repeats the last kept point.
                (None, _) => true,
                (Some(_), None) => false,
                (Some(incoming), Some(outgoing)) => {
                    approx_eq(&incoming, &outgoing, epsilon)
                }
            };

        if !redundant {
            simplified.push(current);
            last_kept = current;
        }
    }

    simplified.push(points[points.len() - 1]);
    simplified
}
