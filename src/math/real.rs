use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// Floating-point trait for the divided difference computations.
///
/// Implemented for `f64` and `f32`. Everything in the crate is written
/// against this trait, so the two widths share one implementation, and
/// can be checked against each other.
pub trait Real: Float + FloatConst + Debug + Display + Default + Send + Sync + 'static {
    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// All numerical constants of the crate originate as f64 literals.
    fn from_f64(x: f64) -> Self;

    /// Widening conversion to f64, for reporting
    fn as_f64(self) -> f64;
}

impl Real for f64 {
    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

// ----- Tests ---------------------------------------------------------------------
