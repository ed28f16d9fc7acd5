//! Error types for curve fitting operations.

use thiserror::Error;

/// Errors that can occur while fitting or resampling a curve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// Fewer than two (distinct) points were supplied.
    #[error("curve fitting needs at least 2 distinct points. Found: {actual}")]
    TooFewPoints { actual: usize },

    /// A closed curve was requested but the first and last coordinate of
    /// an axis differ by more than epsilon.
    #[error("closed curve: first and last point must match (axis {axis})")]
    ClosedCurveMismatch { axis: usize },

    /// The sample spacing must be finite and positive.
    #[error("point spacing must be finite and greater than zero")]
    InvalidSpacing,

    /// The distance array does not start at zero or decreases somewhere.
    #[cfg(feature = "monotonic_check")]
    #[error(
        "distances must start at zero and be non-decreasing (index {index})"
    )]
    NonMonotonicDistances { index: usize },

    /// The coefficient matrix handed to the solver is not square.
    #[error("coefficient matrix must be square. Found: {rows}×{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Two inputs that must agree in length do not.
    #[error("length mismatch: expected {expected}, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The equation builder produced a different number of rows than there
    /// are unknowns.
    #[error("linear system has {unknowns} unknowns but {equations} equations")]
    InconsistentSystem { unknowns: usize, equations: usize },

    /// No non-zero pivot exists for a column during elimination.
    #[error(
        "linear system has no unique solution (no pivot in column {column})"
    )]
    SingularSystem { column: usize },
}

/// Coarse classification of a [`FitError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad shapes, too few points or mismatching closed-curve ends.
    InvalidArgument,
    /// The linear system has no unique solution.
    SingularSystem,
}

impl FitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FitError::SingularSystem { .. } => ErrorKind::SingularSystem,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Returns `true` for malformed shapes that indicate a bug in the
    /// caller rather than bad user input.
    ///
    /// Everything else (too few points, a closed curve whose ends do not
    /// meet, a singular configuration) is expected to happen while a user
    /// is picking points and should be reported, not treated as a bug.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            FitError::NonSquareMatrix { .. }
                | FitError::DimensionMismatch { .. }
                | FitError::InconsistentSystem { .. }
        )
    }
}

/// Result type for curve fitting operations.
pub type FitResult<T> = Result<T, FitError>;
