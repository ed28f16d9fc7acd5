//! Arc-length positions at which a fitted curve is resampled.

use crate::{point::Scalar, FitError, FitResult};

/// Derives the comparison tolerance used throughout one fit call from
/// the requested point spacing.
#[inline]
pub fn epsilon_for<T: Scalar>(spacing: T) -> T {
    spacing / T::from_u8(100).unwrap_or_else(T::one)
}

pub(crate) fn check_spacing<T: Scalar>(spacing: T) -> FitResult<()> {
    if spacing.is_finite() && spacing > T::zero() {
        Ok(())
    } else {
        Err(FitError::InvalidSpacing)
    }
}

#[cfg(feature = "monotonic_check")]
pub(crate) fn check_distances<T: Scalar>(distances: &[T]) -> FitResult<()> {
    if let Some(first) = distances.first() {
        if *first != T::zero() {
            return Err(FitError::NonMonotonicDistances { index: 0 });
        }
    }
    match distances.windows(2).position(|w| !(w[0] <= w[1])) {
        Some(i) => Err(FitError::NonMonotonicDistances { index: i + 1 }),
        None => Ok(()),
    }
}

/// Generates the arc-length positions to resample at.
///
/// The result starts at `0`, contains every entry of `distances` verbatim
/// and is strictly increasing. Between two consecutive distances it steps
/// forward by `spacing` from the last emitted position. A step that would
/// land within `epsilon` of the next distance is skipped so the knot
/// itself is emitted instead of a near-duplicate.
///
/// # Examples
/// ```
/// use arclength_splines::sample_positions;
///
/// let samples = sample_positions(&[0.0, 2.5, 3.0], 1.0, 0.01).unwrap();
/// assert_eq!(samples, vec![0.0, 1.0, 2.0, 2.5, 3.0]);
/// ```
pub fn sample_positions<T: Scalar>(
    distances: &[T],
    spacing: T,
    epsilon: T,
) -> FitResult<Vec<T>> {
    check_spacing(spacing)?;
    #[cfg(feature = "monotonic_check")]
    check_distances(distances)?;

    let mut samples = Vec::new();
    let Some(&first) = distances.first() else {
        return Ok(samples);
    };
    let total = distances[distances.len() - 1];
    if let Some(hint) = ((total - first) / spacing).to_usize() {
        samples.reserve(hint.min(1 << 20) + distances.len());
    }
    samples.push(first);

    for pair in distances.windows(2) {
        let end = pair[1];
        let mut t = pair[0] + spacing;
        while t < end - epsilon {
            samples.push(t);
            t = t + spacing;
        }
        // Zero-length segments repeat the previous distance.
        if samples.last().map_or(true, |last| end > *last) {
            samples.push(end);
        }
    }

    Ok(samples)
}
