//! Miscellaneous math functions for general use

/// The generic floating point width used throughout the crate
pub mod real;
pub use real::Real;

/// Latitude-like angles, represented as (sine, cosine)-like pairs
pub mod angle;
pub use angle::AuxAngle;

/// Divided differences of elementary functions
pub mod divided;

/// Carlson's symmetric elliptic integrals, and the incomplete and
/// complete elliptic integrals of the second kind built on them
pub mod elliptic;

/// Fourier series: Clenshaw summation, and the divided difference thereof
pub mod series;
pub use series::divided_clenshaw;
pub use series::fourier;
