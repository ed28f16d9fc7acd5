//! The complete fit → resample → restore → simplify pipeline.

use crate::{
    curve::FittedCurve,
    guarantee::guarantee_input_points,
    parameterize::{collapse_duplicates, parameterize},
    point::CurvePoint,
    samples::{check_spacing, epsilon_for},
    simplify::{simplify_linear, Simplification},
    system::{effective_degree, fit_axis, BoundaryCondition, SystemParams},
    FitError, FitResult,
};
use core::num::NonZeroUsize;
use num_traits::One;

/// Polynomial degree used when none is given: cubic.
pub const DEFAULT_DEGREE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(2);

/// Options for [`fit_curve()`] and [`fit_spline()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions<T> {
    /// Polynomial degree per segment. Two input points always give a
    /// straight line, whatever is asked for here.
    ///
    /// Default: `3`.
    pub degree: NonZeroUsize,
    /// Arc-length between consecutive output points. Also sets the
    /// comparison tolerance of the whole fit to `spacing / 100`.
    ///
    /// Default: `1`.
    pub spacing: T,
    pub boundary: BoundaryCondition,
    pub simplification: Simplification,
    /// Treat the input as a loop. A copy of the first point is appended
    /// if the last one does not already coincide with it.
    pub closed: bool,
}

impl<T: One> Default for FitOptions<T> {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            spacing: T::one(),
            boundary: BoundaryCondition::default(),
            simplification: Simplification::default(),
            closed: false,
        }
    }
}

impl<T: One> FitOptions<T> {
    /// Default options with the given output point `spacing`.
    pub fn new(spacing: T) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
    }

    pub fn with_degree(mut self, degree: NonZeroUsize) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_simplification(
        mut self,
        simplification: Simplification,
    ) -> Self {
        self.simplification = simplification;
        self
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }
}

/// Fits a piecewise polynomial curve through `points`.
///
/// Every axis is solved independently over the shared arc-length
/// parameterization.
pub fn fit_spline<P: CurvePoint>(
    points: &[P],
    options: &FitOptions<P::Scalar>,
) -> FitResult<FittedCurve<P>> {
    check_spacing(options.spacing)?;
    if points.len() < 2 {
        return Err(FitError::TooFewPoints {
            actual: points.len(),
        });
    }

    let epsilon = epsilon_for(options.spacing);

    let distinct = collapse_duplicates(points, epsilon);
    if distinct.len() < points.len() {
        log::warn!(
            "dropped {} repeated input point(s) before fitting",
            points.len() - distinct.len()
        );
    }
    if distinct.len() < 2 {
        return Err(FitError::TooFewPoints {
            actual: distinct.len(),
        });
    }

    let parameterization = parameterize(&distinct, options.closed, epsilon);
    let knots = parameterization.points;
    let distances = parameterization.distances;

    let degree = effective_degree(knots.len(), options.degree.get());
    if degree != options.degree.get() {
        log::warn!(
            "{} points only support degree {degree}, requested {}",
            knots.len(),
            options.degree
        );
    }

    let params = SystemParams {
        degree,
        boundary: options.boundary,
        closed: options.closed,
        epsilon,
    };

    let coefficients = (0..P::DIM)
        .map(|axis| {
            let values: Vec<P::Scalar> =
                knots.iter().map(|point| point.coord(axis)).collect();
            fit_axis(axis, &values, &distances, &params)
        })
        .collect::<FitResult<Vec<_>>>()?;

    log::debug!(
        "fitted {} knots ({} segments, degree {degree}, {:?}{}) \
         over length {:?}",
        knots.len(),
        knots.len() - 1,
        options.boundary,
        if parameterization.closing_point_appended {
            ", closing point appended"
        } else {
            ""
        },
        distances[distances.len() - 1]
    );

    FittedCurve::new(knots, distances, degree, coefficients)
}

/// Fits a curve through `points` and resamples it every
/// `options.spacing` units of arc-length.
///
/// Every input point appears unchanged in the result, also after
/// simplification.
///
/// # Examples
/// ```
/// use arclength_splines::{fit_curve, FitOptions};
///
/// let points = [[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]];
/// let curve = fit_curve(&points, &FitOptions::new(1.0)).unwrap();
///
/// assert_eq!(curve.len(), 11);
/// assert_eq!(curve[0], [0.0, 0.0, 0.0]);
/// assert_eq!(curve[10], [10.0, 0.0, 0.0]);
/// ```
pub fn fit_curve<P: CurvePoint>(
    points: &[P],
    options: &FitOptions<P::Scalar>,
) -> FitResult<Vec<P>> {
    let curve = fit_spline(points, options)?;
    let epsilon = epsilon_for(options.spacing);

    let mut resampled = curve.resample(options.spacing)?;
    let restored = guarantee_input_points(&mut resampled, points);
    if restored > 0 {
        log::warn!("{restored} input point(s) restored after resampling");
    }

    Ok(match options.simplification {
        Simplification::None => resampled,
        Simplification::Linear => {
            let simplified = simplify_linear(&resampled, points, epsilon);
            log::debug!(
                "simplified {} resampled points to {}",
                resampled.len(),
                simplified.len()
            );
            simplified
        }
    })
}
