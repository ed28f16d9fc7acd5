//! Arc-length parameterized curve fitting and resampling.
//!
//! Fits a piecewise polynomial curve through an ordered sequence of points
//! and resamples it at a fixed arc-length spacing, e.g. to turn a handful
//! of picked points into a dense, smooth path for toolpath or surface
//! generation.
//!
//! The pipeline is:
//!
//! 1. [`parameterize()`] – cumulative arc-length of the input polyline,
//!    optionally closing the loop.
//! 2. [`build_axis_system()`] / [`fit_axis()`] – per coordinate axis, a
//!    square linear system of interpolation, derivative continuity and
//!    boundary equations over the unknown segment coefficients.
//! 3. [`LuDecomposition`] – dense LU with partial pivoting to solve it.
//! 4. [`FittedCurve::resample()`] – evaluation at
//!    [`sample_positions()`]; knots are copied, not evaluated.
//! 5. [`guarantee_input_points()`] – every input point is present verbatim
//!    in the output.
//! 6. [`simplify_linear()`] (optional) – collinear points are dropped.
//!
//! [`fit_curve()`] runs all of it.
//!
//! # Examples
//! ```
//! use arclength_splines::prelude::*;
//!
//! let picked = [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [5.0, 5.0, 0.0]];
//!
//! let options = FitOptions::new(1.0)
//!     .with_degree(NonZeroUsize::MIN)
//!     .with_simplification(Simplification::Linear);
//!
//! assert_eq!(fit_curve(&picked, &options).unwrap(), picked.to_vec());
//! ```
//!
//! Points are anything implementing [`CurvePoint`]; `[f32; D]` and
//! `[f64; D]` work out of the box.
//!
//! All functions are pure. Nothing is cached between calls so fits can run
//! on as many threads as you like.
//!
//! # Cargo Features
#![doc = document_features::document_features!()]

mod error;
pub use error::*;

pub mod curve;
pub mod fit;
pub mod guarantee;
pub mod linalg;
pub mod parameterize;
pub mod point;
pub mod samples;
pub mod simplify;
pub mod system;

pub use curve::FittedCurve;
pub use fit::{fit_curve, fit_spline, FitOptions, DEFAULT_DEGREE};
pub use guarantee::guarantee_input_points;
pub use linalg::{solve, LuDecomposition, Matrix, RowEchelon};
pub use parameterize::{arc_lengths, parameterize, Parameterization};
pub use point::{CurvePoint, Scalar};
pub use samples::{epsilon_for, sample_positions};
pub use simplify::{simplify_linear, Simplification};
pub use system::{
    build_axis_system, column_scales, effective_degree, fit_axis, AxisSystem,
    BoundaryCondition, SystemParams,
};

pub mod prelude {
    //! Everything needed to fit and resample a curve.
    pub use crate::{
        fit_curve, fit_spline, BoundaryCondition, CurvePoint, FitError,
        FitOptions, FitResult, FittedCurve, Simplification,
    };
    pub use core::num::NonZeroUsize;
}
