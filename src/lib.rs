#![doc = r###"
*Divided differences of auxiliary latitudes*.

Given two latitude-like angles, ζ₁ and ζ₂, on one of the auxiliary latitude
scales (geographic, parametric, geocentric, rectifying, conformal, authalic,
or the unbounded isometric scale), compute the divided difference,
*(f(ζ₂) - f(ζ₁)) / (ζ₂ - ζ₁)*, of the conversion, f, to another scale,
accurately, including the limit ζ₁ → ζ₂, where the naive quotient
degenerates to 0/0.

The building blocks are Clenshaw summation of the divided difference of a
trigonometric series, Carlson's symmetric elliptic integrals, and a small
set of cancellation free divided differences of elementary functions.
See [Karney, 2022](crate::Bibliography::Kar22) and
[Karney, 2023](crate::Bibliography::Kar23).

```
use dauxlat::prelude::*;
use float_eq::assert_float_eq;

let ellps = Ellipsoid::named("GRS80")?;
let dal = DAuxLatitude::<f64>::from_ellipsoid(&ellps);
let phi1 = AuxAngle::from_degrees(30.);
let phi2 = AuxAngle::from_degrees(60.);
let d = dal.d_convert(AuxKind::Geographic, AuxKind::Conformal, &phi1, &phi2);
assert_float_eq!(d, 0.999_984_470_528_816_4, abs <= 1e-14);
# Ok::<(), anyhow::Error>(())
```
"###]

/// Free functions and generic numerics: the angle type, elementary
/// divided differences, elliptic integrals and series summation.
pub mod math;

/// Auxiliary latitude kinds, their elementary conversions, and the divided
/// difference engine built on top of them.
pub mod auxiliary;

/// Definitions of the ellipsoids of revolution used to parametrize
/// the auxiliary latitude engines.
pub mod ellipsoid;

mod bibliography;
pub use bibliography::Bibliography;

pub use crate::auxiliary::AuxKind;
pub use crate::auxiliary::AuxLatitude;
pub use crate::auxiliary::CoefficientFiller;
pub use crate::auxiliary::DAuxLatitude;
pub use crate::auxiliary::Quadrature;
pub use crate::ellipsoid::Ellipsoid;
pub use crate::math::AuxAngle;
pub use crate::math::Real;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::AuxAngle;
    pub use crate::AuxKind;
    pub use crate::AuxLatitude;
    pub use crate::DAuxLatitude;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::Real;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use crate::auxiliary::ind;
    pub use crate::auxiliary::CoefficientFiller;
    pub use crate::auxiliary::Quadrature;
    pub use crate::auxiliary::AUX_NUMBER;
    pub use crate::auxiliary::L_MAX;
    pub use crate::math::divided::*;
    pub use crate::math::elliptic;
    pub use crate::math::fourier;
    pub use crate::math::series;
    pub use crate::prelude::*;
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;
}

use thiserror::Error;

/// Errors from the non-numerical parts of the library. The numerical
/// kernel itself never fails: it signals trouble through NaN and ∞.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} not found{1}")]
    NotFound(String, String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),
}
