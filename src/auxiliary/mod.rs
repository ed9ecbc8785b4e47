mod coefficients;
mod divided;
mod kind;
mod latitude;

pub use coefficients::CoefficientFiller;
pub use coefficients::Quadrature;
pub use divided::DAuxLatitude;
pub use kind::ind;
pub use kind::AuxKind;
pub use kind::AUX_NUMBER;
pub use latitude::AuxLatitude;

/// The number of terms of the Fourier series representing the
/// conversions between auxiliary latitudes
pub const L_MAX: usize = 6;
