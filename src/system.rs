//! Per-axis linear systems for piecewise polynomial interpolation.
//!
//! Segment `s` spans `distances[s]..distances[s + 1]` and owns `d + 1`
//! unknowns, the coefficients of
//!
//! `pₛ(u) = cₛ₀ + cₛ₁·u + … + cₛ_d·uᵈ` with `u = t − distances[s]`.
//!
//! Unknown `cₛₖ` lives in column `s·(d + 1) + k`. Rows are emitted in a
//! fixed order:
//!
//! 1. start interpolation, one per segment,
//! 2. end interpolation, one per segment,
//! 3. derivative continuity (orders `1..d`) at every interior knot,
//! 4. closed-curve wrap (orders `1..d`) if the curve is closed,
//! 5. boundary rows filling whatever is left.
//!
//! Steps 1–3 leave exactly `d − 1` free rows, so the system is square for
//! any degree and point count.
//!
//! A wrap row that is a combination of the rows before it is left out and
//! its slot goes to step 5. This happens for even degrees on loops with an
//! even number of segments, where periodic interpolation at the knots has
//! no unique solution.

use crate::{
    linalg::{LuDecomposition, Matrix, RowEchelon},
    point::{from_count, Scalar},
    FitError, FitResult,
};

/// How the rows left over after interpolation, continuity and wrap
/// equations are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// High-order derivatives vanish at both curve ends.
    ///
    /// Each end zeroes orders `d − 1, d − 2, …` in turn, the start taking
    /// the extra row when the count is odd. Cubics get the classic
    /// `p″ = 0` at both ends; quadratics get `p′ = 0` at the start only.
    #[default]
    NaturalSpline,
    /// The `d`-th derivative is continuous across the second and the
    /// second-to-last knot. Falls back to natural rows for fewer than four
    /// points or for slots it cannot fill.
    NotAKnot,
}

/// Parameters shared by the systems of all axes of one fit.
#[derive(Clone, Copy, Debug)]
pub struct SystemParams<T> {
    /// Requested polynomial degree. Clamped to `1` for two points.
    pub degree: usize,
    pub boundary: BoundaryCondition,
    pub closed: bool,
    /// Tolerance for the closed-curve endpoint check.
    pub epsilon: T,
}

/// Degree actually used for `point_count` points.
///
/// Two points only give two equations per axis, enough for a line and
/// nothing more.
#[inline]
pub fn effective_degree(point_count: usize, requested: usize) -> usize {
    if point_count == 2 {
        1
    } else {
        requested.max(1)
    }
}

/// Column layout of the unknowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentLayout {
    degree: usize,
    segments: usize,
}

impl SegmentLayout {
    pub fn new(degree: usize, segments: usize) -> Self {
        Self { degree, segments }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Total number of unknowns, `(d + 1)·segments`.
    #[inline]
    pub fn unknowns(&self) -> usize {
        (self.degree + 1) * self.segments
    }

    /// Column of the coefficient of `u^power` in `segment`.
    #[inline]
    pub fn column(&self, segment: usize, power: usize) -> usize {
        segment * (self.degree + 1) + power
    }

    fn zero_row<T: Scalar>(&self) -> Vec<T> {
        vec![T::zero(); self.unknowns()]
    }

    /// Adds `sign · pₛ⁽ᵒʳᵈᵉʳ⁾(u)` to `row`.
    ///
    /// The coefficient of `cₛₖ` in the `m`-th derivative is
    /// `k!/(k − m)! · u^(k − m)` for `k ≥ m` and zero otherwise.
    fn add_derivative<T: Scalar>(
        &self,
        row: &mut [T],
        segment: usize,
        order: usize,
        u: T,
        sign: T,
    ) {
        for power in order..=self.degree {
            let weight = falling_factorial::<T>(power, order)
                * u.powi((power - order) as i32);
            let column = self.column(segment, power);
            row[column] = row[column] + sign * weight;
        }
    }
}

/// `k·(k − 1)·…·(k − m + 1)`, i.e. `k!/(k − m)!`.
fn falling_factorial<T: Scalar>(k: usize, m: usize) -> T {
    (k - m + 1..=k).fold(T::one(), |product, i| product * from_count(i))
}

/// `pₛ(u)`; with `u = 0` this is a start interpolation row, with `u` set
/// to the segment span an end interpolation row.
pub fn interpolation_row<T: Scalar>(
    layout: &SegmentLayout,
    segment: usize,
    u: T,
) -> Vec<T> {
    let mut row = layout.zero_row();
    layout.add_derivative(&mut row, segment, 0, u, T::one());
    row
}

/// `pₗ⁽ᵐ⁾(hₗ) − pₗ₊₁⁽ᵐ⁾(0)`: derivative continuity at the knot joining
/// segment `left` (of span `left_span`) and its successor.
pub fn continuity_row<T: Scalar>(
    layout: &SegmentLayout,
    left: usize,
    left_span: T,
    order: usize,
) -> Vec<T> {
    let mut row = layout.zero_row();
    layout.add_derivative(&mut row, left, order, left_span, T::one());
    layout.add_derivative(&mut row, left + 1, order, T::zero(), -T::one());
    row
}

/// `p_last⁽ᵐ⁾(h_last) − p₀⁽ᵐ⁾(0)`: derivative continuity where a closed
/// curve meets its own start.
pub fn wrap_row<T: Scalar>(
    layout: &SegmentLayout,
    last_span: T,
    order: usize,
) -> Vec<T> {
    let mut row = layout.zero_row();
    let last = layout.segments() - 1;
    layout.add_derivative(&mut row, last, order, last_span, T::one());
    layout.add_derivative(&mut row, 0, order, T::zero(), -T::one());
    row
}

/// `pₗ⁽ᵈ⁾ − pₗ₊₁⁽ᵈ⁾`: the top derivative is constant per segment, so
/// equating it merges the two pieces into one polynomial.
pub fn not_a_knot_row<T: Scalar>(
    layout: &SegmentLayout,
    left: usize,
) -> Vec<T> {
    let mut row = layout.zero_row();
    let degree = layout.degree();
    layout.add_derivative(&mut row, left, degree, T::zero(), T::one());
    layout.add_derivative(&mut row, left + 1, degree, T::zero(), -T::one());
    row
}

/// `pₛ⁽ᵐ⁾(u)`: zeroes a derivative at a curve end.
pub fn natural_row<T: Scalar>(
    layout: &SegmentLayout,
    segment: usize,
    u: T,
    order: usize,
) -> Vec<T> {
    let mut row = layout.zero_row();
    layout.add_derivative(&mut row, segment, order, u, T::one());
    row
}

/// Splits `slots` natural rows between the curve start and end.
///
/// The start gets the larger half when `slots` is odd.
#[inline]
pub fn natural_split(slots: usize) -> (usize, usize) {
    (slots.div_ceil(2), slots / 2)
}

/// Per-column factors `hₛ⁻ᵏ` that turn the coefficient of `uᵏ` into the
/// coefficient of `(u/hₛ)ᵏ`, `hₛ` being the span of segment `s`.
///
/// Scaled columns keep every entry of the system near `1` whatever the
/// length of the segments. Zero-length segments stay unscaled.
pub fn column_scales<T: Scalar>(
    layout: &SegmentLayout,
    distances: &[T],
) -> Vec<T> {
    (0..layout.segments())
        .flat_map(|segment| {
            let span = distances[segment + 1] - distances[segment];
            let inverse = if span > T::zero() {
                span.recip()
            } else {
                T::one()
            };
            (0..=layout.degree()).map(move |power| inverse.powi(power as i32))
        })
        .collect()
}

/// One square system `matrix · coefficients = constants`.
#[derive(Clone, Debug)]
pub struct AxisSystem<T> {
    pub layout: SegmentLayout,
    pub matrix: Matrix<T>,
    pub constants: Vec<T>,
}

struct RowWriter<T> {
    matrix: Matrix<T>,
    constants: Vec<T>,
    next: usize,
}

impl<T: Scalar> RowWriter<T> {
    fn new(unknowns: usize) -> Self {
        Self {
            matrix: Matrix::zeros(unknowns, unknowns),
            constants: vec![T::zero(); unknowns],
            next: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.matrix.rows().saturating_sub(self.next)
    }

    fn push(&mut self, row: Vec<T>, constant: T) -> FitResult<()> {
        if self.next >= self.matrix.rows() {
            return Err(FitError::InconsistentSystem {
                unknowns: self.matrix.cols(),
                equations: self.next + 1,
            });
        }
        self.matrix.row_mut(self.next).copy_from_slice(&row);
        self.constants[self.next] = constant;
        self.next += 1;
        Ok(())
    }
}

/// Builds the system for one coordinate axis.
///
/// `values[i]` is the coordinate of knot `i` along `axis`, `distances[i]`
/// its arc-length.
pub fn build_axis_system<T: Scalar>(
    axis: usize,
    values: &[T],
    distances: &[T],
    params: &SystemParams<T>,
) -> FitResult<AxisSystem<T>> {
    let n = values.len();
    if n < 2 {
        return Err(FitError::TooFewPoints { actual: n });
    }
    if distances.len() != n {
        return Err(FitError::DimensionMismatch {
            expected: n,
            actual: distances.len(),
        });
    }
    if params.closed && (values[0] - values[n - 1]).abs() > params.epsilon {
        return Err(FitError::ClosedCurveMismatch { axis });
    }

    let degree = effective_degree(n, params.degree);
    let segments = n - 1;
    let layout = SegmentLayout::new(degree, segments);
    let span = |segment: usize| distances[segment + 1] - distances[segment];
    let mut rows = RowWriter::new(layout.unknowns());

    for segment in 0..segments {
        rows.push(
            interpolation_row(&layout, segment, T::zero()),
            values[segment],
        )?;
    }
    for segment in 0..segments {
        rows.push(
            interpolation_row(&layout, segment, span(segment)),
            values[segment + 1],
        )?;
    }
    for left in 0..segments - 1 {
        for order in 1..degree {
            rows.push(
                continuity_row(&layout, left, span(left), order),
                T::zero(),
            )?;
        }
    }

    if params.closed {
        let scales = column_scales(&layout, distances);
        let scaled = |row: &[T]| -> Vec<T> {
            row.iter().zip(&scales).map(|(a, s)| *a * *s).collect()
        };
        let mut independent = RowEchelon::new(T::epsilon().sqrt());
        for row in 0..rows.next {
            independent.insert(&scaled(rows.matrix.row(row)));
        }

        let wrap_orders = (degree - 1).min(rows.remaining());
        for order in 1..=wrap_orders {
            let row = wrap_row(&layout, span(segments - 1), order);
            if independent.insert(&scaled(&row)) {
                rows.push(row, T::zero())?;
            } else {
                log::debug!(
                    "axis {axis}: wrap row of order {order} is dependent, \
                     leaving its slot to the boundary condition"
                );
            }
        }
    }

    if params.boundary == BoundaryCondition::NotAKnot && n > 3 {
        if rows.remaining() > 0 {
            rows.push(not_a_knot_row(&layout, 0), T::zero())?;
        }
        if rows.remaining() > 0 {
            rows.push(not_a_knot_row(&layout, segments - 2), T::zero())?;
        }
    }

    let (start, end) = natural_split(rows.remaining());
    for i in 0..start {
        let order = degree - 1 - i;
        rows.push(natural_row(&layout, 0, T::zero(), order), T::zero())?;
    }
    for i in 0..end {
        let order = degree - 1 - i;
        rows.push(
            natural_row(&layout, segments - 1, span(segments - 1), order),
            T::zero(),
        )?;
    }

    if rows.next != layout.unknowns() {
        return Err(FitError::InconsistentSystem {
            unknowns: layout.unknowns(),
            equations: rows.next,
        });
    }

    log::trace!(
        "axis {axis}: {} segments of degree {degree}, {}×{} system",
        segments,
        layout.unknowns(),
        layout.unknowns()
    );

    Ok(AxisSystem {
        layout,
        matrix: rows.matrix,
        constants: rows.constants,
    })
}

/// Fits one axis and returns the `d + 1` coefficients of every segment.
///
/// The system is solved for the coefficients of `(u/hₛ)ᵏ` and scaled back,
/// which keeps long and short segments equally well conditioned.
pub fn fit_axis<T: Scalar>(
    axis: usize,
    values: &[T],
    distances: &[T],
    params: &SystemParams<T>,
) -> FitResult<Vec<Vec<T>>> {
    let mut system = build_axis_system(axis, values, distances, params)?;
    let scales = column_scales(&system.layout, distances);
    for (col, scale) in scales.iter().enumerate() {
        system.matrix.scale_column(col, *scale);
    }

    let mut solution =
        LuDecomposition::new(system.matrix)?.solve(&system.constants)?;
    for (value, scale) in solution.iter_mut().zip(&scales) {
        *value = *value * *scale;
    }
    Ok(solution
        .chunks(system.layout.degree() + 1)
        .map(<[T]>::to_vec)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARIES: [BoundaryCondition; 2] =
        [BoundaryCondition::NaturalSpline, BoundaryCondition::NotAKnot];

    fn params(
        degree: usize,
        boundary: BoundaryCondition,
        closed: bool,
    ) -> SystemParams<f64> {
        SystemParams {
            degree,
            boundary,
            closed,
            epsilon: 0.01,
        }
    }

    fn eval(coefficients: &[f64], u: f64) -> f64 {
        coefficients.iter().rev().fold(0.0, |acc, c| acc * u + c)
    }

    fn derivative(coefficients: &[f64], u: f64, order: usize) -> f64 {
        (order..coefficients.len())
            .map(|k| {
                falling_factorial::<f64>(k, order)
                    * coefficients[k]
                    * u.powi((k - order) as i32)
            })
            .sum()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn interpolation_rows() {
        let layout = SegmentLayout::new(3, 2);
        assert_eq!(
            interpolation_row(&layout, 0, 0.0),
            vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            interpolation_row(&layout, 1, 2.0),
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 4.0, 8.0]
        );
    }

    #[test]
    fn continuity_rows() {
        let layout = SegmentLayout::new(3, 2);
        assert_eq!(
            continuity_row(&layout, 0, 2.0, 1),
            vec![0.0, 1.0, 4.0, 12.0, 0.0, -1.0, 0.0, 0.0]
        );
        assert_eq!(
            continuity_row(&layout, 0, 2.0, 2),
            vec![0.0, 0.0, 2.0, 12.0, 0.0, 0.0, -2.0, 0.0]
        );
    }

    #[test]
    fn wrap_rows() {
        let layout = SegmentLayout::new(3, 2);
        assert_eq!(
            wrap_row(&layout, 2.0, 1),
            vec![0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 4.0, 12.0]
        );
    }

    #[test]
    fn not_a_knot_rows() {
        let layout = SegmentLayout::new(3, 3);
        let mut expected = vec![0.0; 12];
        expected[3] = 6.0;
        expected[7] = -6.0;
        assert_eq!(not_a_knot_row::<f64>(&layout, 0), expected);
    }

    #[test]
    fn natural_rows() {
        let layout = SegmentLayout::new(3, 2);
        assert_eq!(
            natural_row(&layout, 0, 0.0, 2),
            vec![0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            natural_row(&layout, 1, 1.0, 2),
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 6.0]
        );
    }

    #[test]
    fn open_quadratic_starts_with_zero_slope() {
        let p = params(2, BoundaryCondition::NaturalSpline, false);
        let values = [0.0, 1.0, 0.0];
        let distances = [0.0, 1.0, 2.0];

        let system = build_axis_system(0, &values, &distances, &p).unwrap();
        let layout = SegmentLayout::new(2, 2);
        assert_eq!(system.matrix.row(5), natural_row(&layout, 0, 0.0, 1));

        let coefficients = fit_axis(0, &values, &distances, &p).unwrap();
        assert_close(&coefficients[0], &[0.0, 0.0, 1.0]);
        assert_close(&coefficients[1], &[1.0, 2.0, -3.0]);
    }

    #[test]
    fn natural_split_favours_start() {
        assert_eq!(natural_split(0), (0, 0));
        assert_eq!(natural_split(1), (1, 0));
        assert_eq!(natural_split(2), (1, 1));
        assert_eq!(natural_split(3), (2, 1));
    }

    #[test]
    fn systems_are_square() {
        for n in 2..7 {
            let values: Vec<f64> =
                (0..n).map(|i| (i as f64 * 0.7).sin()).collect();
            let distances: Vec<f64> = (0..n).map(|i| i as f64 * 1.5).collect();
            for degree in 1..6 {
                for boundary in BOUNDARIES {
                    let p = params(degree, boundary, false);
                    let system =
                        build_axis_system(0, &values, &distances, &p).unwrap();
                    assert!(system.matrix.is_square());
                    assert_eq!(system.constants.len(), system.matrix.rows());
                }
            }
        }
    }

    #[test]
    fn natural_cubic_through_three_points() {
        let coefficients = fit_axis(
            0,
            &[0.0, 1.0, 0.0],
            &[0.0, 1.0, 2.0],
            &params(3, BoundaryCondition::NaturalSpline, false),
        )
        .unwrap();
        assert_close(&coefficients[0], &[0.0, 1.5, 0.0, -0.5]);
        assert_close(&coefficients[1], &[1.0, 0.0, -1.5, 0.5]);
    }

    #[test]
    fn not_a_knot_reproduces_a_cubic() {
        let coefficients = fit_axis(
            0,
            &[0.0, 1.0, 8.0, 27.0],
            &[0.0, 1.0, 2.0, 3.0],
            &params(3, BoundaryCondition::NotAKnot, false),
        )
        .unwrap();
        assert_close(&coefficients[0], &[0.0, 0.0, 0.0, 1.0]);
        assert_close(&coefficients[1], &[1.0, 3.0, 3.0, 1.0]);
        assert_close(&coefficients[2], &[8.0, 12.0, 6.0, 1.0]);
    }

    #[test]
    fn not_a_knot_needs_four_points() {
        let values = [0.0, 1.0, 0.0];
        let distances = [0.0, 1.0, 2.0];
        let [natural, not_a_knot] = BOUNDARIES.map(|boundary| {
            fit_axis(0, &values, &distances, &params(3, boundary, false))
                .unwrap()
        });
        assert_eq!(natural, not_a_knot);
    }

    #[test]
    fn fitted_segments_interpolate_and_join_smoothly() {
        let values = [0.0, 2.0, -1.0, 3.0, 0.5, 1.0];
        let distances = [0.0, 2.0, 5.5, 8.0, 9.0, 12.0];
        for degree in 1..6 {
            for boundary in BOUNDARIES {
                let p = params(degree, boundary, false);
                let coefficients =
                    fit_axis(0, &values, &distances, &p).unwrap();
                for (s, c) in coefficients.iter().enumerate() {
                    let span = distances[s + 1] - distances[s];
                    assert!((eval(c, 0.0) - values[s]).abs() < 1e-8);
                    assert!((eval(c, span) - values[s + 1]).abs() < 1e-8);
                }
                for s in 0..coefficients.len() - 1 {
                    let span = distances[s + 1] - distances[s];
                    for order in 1..degree {
                        let left = derivative(&coefficients[s], span, order);
                        let right =
                            derivative(&coefficients[s + 1], 0.0, order);
                        let tolerance = 1e-6 * (1.0 + left.abs());
                        assert!((left - right).abs() < tolerance);
                    }
                }
            }
        }
    }

    #[test]
    fn closed_curve_wraps_derivatives() {
        let values = [0.0, 5.0, 5.0, 0.0, 0.0];
        let distances = [0.0, 5.0, 10.0, 15.0, 20.0];
        let closed = params(3, BoundaryCondition::NaturalSpline, true);
        let coefficients =
            fit_axis(0, &values, &distances, &closed).unwrap();
        let last = &coefficients[3];
        for order in 1..3 {
            let end = derivative(last, 5.0, order);
            let start = derivative(&coefficients[0], 0.0, order);
            assert!((end - start).abs() < 1e-9);
        }
    }

    #[test]
    fn dependent_wrap_rows_yield_to_natural_rows() {
        let values = [0.0, 5.0, 5.0, 0.0, 0.0];
        let distances = [0.0, 5.0, 10.0, 15.0, 20.0];
        let closed = params(2, BoundaryCondition::NaturalSpline, true);

        let system =
            build_axis_system(0, &values, &distances, &closed).unwrap();
        let layout = SegmentLayout::new(2, 4);
        assert_eq!(system.matrix.row(11), natural_row(&layout, 0, 0.0, 1));

        let coefficients = fit_axis(0, &values, &distances, &closed).unwrap();
        assert_close(&coefficients[0], &[0.0, 0.0, 0.2]);
        assert_close(&coefficients[1], &[5.0, 2.0, -0.4]);
        assert_close(&coefficients[2], &[5.0, -2.0, 0.2]);
        assert_close(&coefficients[3], &[0.0, 0.0, 0.0]);

        // Orders 1 and 2 still wrap for degree 4, order 3 does not.
        let closed = params(4, BoundaryCondition::NaturalSpline, true);
        let system =
            build_axis_system(0, &values, &distances, &closed).unwrap();
        let layout = SegmentLayout::new(4, 4);
        assert_eq!(system.matrix.row(17), wrap_row(&layout, 5.0, 1));
        assert_eq!(system.matrix.row(18), wrap_row(&layout, 5.0, 2));
        assert_eq!(system.matrix.row(19), natural_row(&layout, 0, 0.0, 3));

        let coefficients = fit_axis(0, &values, &distances, &closed).unwrap();
        for (s, c) in coefficients.iter().enumerate() {
            assert!((eval(c, 0.0) - values[s]).abs() < 1e-9);
            assert!((eval(c, 5.0) - values[s + 1]).abs() < 1e-9);
        }
        for order in 1..3 {
            let end = derivative(&coefficients[3], 5.0, order);
            let start = derivative(&coefficients[0], 0.0, order);
            assert!((end - start).abs() < 1e-9);
        }
    }

    #[test]
    fn long_segments_stay_regular() {
        let values = [0.0, 2000.0, 0.0, 2000.0];
        let distances = [0.0, 2000.0, 4000.0, 6000.0];
        let p = params(5, BoundaryCondition::NaturalSpline, false);
        let coefficients = fit_axis(0, &values, &distances, &p).unwrap();
        for (s, c) in coefficients.iter().enumerate() {
            assert!((eval(c, 2000.0) - values[s + 1]).abs() < 1e-6);
        }

        let p = SystemParams {
            degree: 3,
            boundary: BoundaryCondition::NaturalSpline,
            closed: false,
            epsilon: 0.1f32,
        };
        let coefficients =
            fit_axis(0, &[0.0f32, 300.0, 300.0], &[0.0, 300.0, 600.0], &p)
                .unwrap();
        let end = coefficients[1]
            .iter()
            .rev()
            .fold(0.0f32, |acc, c| acc * 300.0 + c);
        assert!((end - 300.0).abs() < 1e-2, "{end}");
    }

    #[test]
    fn column_scales_normalize_segments() {
        let layout = SegmentLayout::new(2, 2);
        assert_eq!(
            column_scales(&layout, &[0.0, 2.0, 2.5]),
            vec![1.0, 0.5, 0.25, 1.0, 2.0, 4.0]
        );
        assert_eq!(
            column_scales(&SegmentLayout::new(1, 1), &[1.0, 1.0]),
            vec![1.0, 1.0]
        );
    }

    #[test]
    fn two_points_clamp_to_a_line() {
        let coefficients = fit_axis(
            0,
            &[1.0, 11.0],
            &[0.0, 5.0],
            &params(3, BoundaryCondition::NaturalSpline, false),
        )
        .unwrap();
        assert_eq!(coefficients.len(), 1);
        assert_close(&coefficients[0], &[1.0, 2.0]);
        assert_eq!(coefficients[0].len(), 2);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let p = params(3, BoundaryCondition::NaturalSpline, false);
        assert_eq!(
            fit_axis(0, &[1.0], &[0.0], &p).unwrap_err(),
            FitError::TooFewPoints { actual: 1 }
        );
        assert_eq!(
            fit_axis(0, &[1.0, 2.0], &[0.0], &p).unwrap_err(),
            FitError::DimensionMismatch { expected: 2, actual: 1 }
        );

        let closed = params(3, BoundaryCondition::NaturalSpline, true);
        assert_eq!(
            fit_axis(2, &[0.0, 5.0, 5.0], &[0.0, 5.0, 10.0], &closed)
                .unwrap_err(),
            FitError::ClosedCurveMismatch { axis: 2 }
        );
        assert!(
            fit_axis(2, &[0.0, 5.0, 0.005], &[0.0, 5.0, 10.0], &closed).is_ok()
        );
    }

    #[test]
    fn duplicate_knots_are_singular() {
        let err = fit_axis(
            0,
            &[0.0, 1.0, 1.0, 2.0],
            &[0.0, 1.0, 1.0, 2.0],
            &params(1, BoundaryCondition::NaturalSpline, false),
        )
        .unwrap_err();
        assert!(matches!(err, FitError::SingularSystem { .. }));
    }
}
