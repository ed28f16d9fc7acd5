//! Evaluation and resampling of a fitted piecewise polynomial curve.

use crate::{
    point::{CurvePoint, Scalar},
    samples::{check_spacing, epsilon_for, sample_positions},
    FitError, FitResult,
};
use lerp::Lerp;
use num_traits::{Float, One, Zero};

/// A curve made of polynomial segments, one per pair of consecutive knots,
/// parameterized by arc-length along the knot polyline.
#[derive(Clone, Debug)]
pub struct FittedCurve<P: CurvePoint> {
    knots: Vec<P>,
    distances: Vec<P::Scalar>,
    degree: usize,
    // coefficients[axis][segment * (degree + 1) + power]
    coefficients: Vec<Vec<P::Scalar>>,
}

impl<P: CurvePoint> FittedCurve<P> {
    /// Assembles a curve from its parts.
    ///
    /// `coefficients[axis][segment]` holds the `degree + 1` coefficients of
    /// that segment in ascending powers of the local parameter.
    pub fn new(
        knots: Vec<P>,
        distances: Vec<P::Scalar>,
        degree: usize,
        coefficients: Vec<Vec<Vec<P::Scalar>>>,
    ) -> FitResult<Self> {
        if knots.len() < 2 {
            return Err(FitError::TooFewPoints {
                actual: knots.len(),
            });
        }
        if distances.len() != knots.len() {
            return Err(FitError::DimensionMismatch {
                expected: knots.len(),
                actual: distances.len(),
            });
        }
        #[cfg(feature = "monotonic_check")]
        crate::samples::check_distances(&distances)?;
        if coefficients.len() != P::DIM {
            return Err(FitError::DimensionMismatch {
                expected: P::DIM,
                actual: coefficients.len(),
            });
        }

        let segments = knots.len() - 1;
        let mut flat = Vec::with_capacity(P::DIM);
        for axis in coefficients {
            if axis.len() != segments {
                return Err(FitError::DimensionMismatch {
                    expected: segments,
                    actual: axis.len(),
                });
            }
            let mut values = Vec::with_capacity(segments * (degree + 1));
            for segment in axis {
                if segment.len() != degree + 1 {
                    return Err(FitError::DimensionMismatch {
                        expected: degree + 1,
                        actual: segment.len(),
                    });
                }
                values.extend(segment);
            }
            flat.push(values);
        }

        Ok(Self {
            knots,
            distances,
            degree,
            coefficients: flat,
        })
    }

    /// The points the curve interpolates.
    pub fn knots(&self) -> &[P] {
        &self.knots
    }

    /// Arc-length of every knot.
    pub fn distances(&self) -> &[P::Scalar] {
        &self.distances
    }

    /// Polynomial degree of every segment.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn segment_count(&self) -> usize {
        self.knots.len() - 1
    }

    /// Total arc-length of the knot polyline.
    pub fn length(&self) -> P::Scalar {
        self.distances[self.distances.len() - 1]
    }

    /// Coefficients of `segment` along `axis`, lowest power first.
    pub fn coefficients(&self, axis: usize, segment: usize) -> &[P::Scalar] {
        let stride = self.degree + 1;
        &self.coefficients[axis][segment * stride..(segment + 1) * stride]
    }

    /// Index of the first segment whose end lies at or beyond `t`.
    ///
    /// Positions past the end (e.g. from rounding on the last sample) map
    /// to the last segment.
    pub fn segment_index(&self, t: P::Scalar) -> usize {
        self.distances[1..]
            .partition_point(|end| *end < t)
            .min(self.segment_count() - 1)
    }

    /// The knot whose distance equals `t` within `epsilon`, looking only at
    /// the two ends of `segment`.
    fn knot_at(
        &self,
        segment: usize,
        t: P::Scalar,
        epsilon: P::Scalar,
    ) -> Option<usize> {
        [segment + 1, segment]
            .into_iter()
            .find(|&knot| self.distances[knot] == t)
            .or_else(|| {
                [segment + 1, segment]
                    .into_iter()
                    .find(|&knot| (self.distances[knot] - t).abs() <= epsilon)
            })
    }

    /// Evaluates one axis of `segment` at local parameter `u`.
    fn evaluate_axis(
        &self,
        axis: usize,
        segment: usize,
        u: P::Scalar,
    ) -> P::Scalar {
        let value = self
            .coefficients(axis, segment)
            .iter()
            .rev()
            .fold(P::Scalar::zero(), |acc, c| acc * u + *c);

        if value.is_finite() {
            return value;
        }

        let span = self.distances[segment + 1] - self.distances[segment];
        let mut fraction = u / span;
        if fraction.is_nan() {
            fraction = P::Scalar::zero();
        }
        let fraction = fraction.max(P::Scalar::zero()).min(P::Scalar::one());
        log::warn!(
            "non-finite value on segment {segment}, axis {axis}; \
             falling back to linear interpolation at {:?}",
            fraction
        );
        self.knots[segment]
            .coord(axis)
            .lerp(self.knots[segment + 1].coord(axis), fraction)
    }

    fn evaluate(&self, t: P::Scalar, epsilon: P::Scalar) -> P {
        let segment = self.segment_index(t);
        if let Some(knot) = self.knot_at(segment, t, epsilon) {
            return self.knots[knot];
        }
        let u = t - self.distances[segment];
        P::from_coords(|axis| self.evaluate_axis(axis, segment, u))
    }

    /// The curve point at arc-length `t`, clamped to `[0, length]`.
    ///
    /// At knot positions the knot itself is returned.
    pub fn point_at(&self, t: P::Scalar) -> P {
        let t = t.max(P::Scalar::zero()).min(self.length());
        self.evaluate(t, P::Scalar::zero())
    }

    /// Evaluates the curve at every position in `samples`.
    ///
    /// Samples within `epsilon` of a knot distance yield the knot verbatim
    /// instead of the polynomial value.
    pub fn resample_at(
        &self,
        samples: &[P::Scalar],
        epsilon: P::Scalar,
    ) -> Vec<P> {
        samples
            .iter()
            .map(|&t| self.evaluate(t, epsilon))
            .collect()
    }

    /// Resamples the curve every `spacing` units of arc-length, always
    /// including the knots.
    pub fn resample(&self, spacing: P::Scalar) -> FitResult<Vec<P>> {
        check_spacing(spacing)?;
        let epsilon = epsilon_for(spacing);
        let samples = sample_positions(&self.distances, spacing, epsilon)?;
        Ok(self.resample_at(&samples, epsilon))
    }
}
