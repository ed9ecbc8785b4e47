//! Carlson's symmetric elliptic integrals, following the duplication
//! algorithms of [Carlson, 1995](crate::Bibliography::Car95), and the
//! Legendre integral of the second kind, expressed in terms of them
//! ([DLMF](crate::Bibliography::Dlmf), §19.25).

use super::Real;

/// Carlson's symmetric integral of the first kind,
/// *R_F(x, y, z) = ½ ∫₀^∞ [(t + x) (t + y) (t + z)]^(-½) dt*.
///
/// The arguments must be non-negative, and at most one of them zero.
#[allow(clippy::many_single_char_names)]
pub fn rf<T: Real>(x: T, y: T, z: T) -> T {
    let c = T::from_f64;
    let tolerance = (c(3. * 0.01) * T::epsilon()).powf(c(1. / 8.));
    let a0 = (x + y + z) / c(3.);
    let q = (a0 - x).abs().max((a0 - y).abs()).max((a0 - z).abs()) / tolerance;

    let (mut an, mut x0, mut y0, mut z0) = (a0, x, y, z);
    let mut mul = T::one();
    while q >= mul * an.abs() {
        let lambda = x0.sqrt() * y0.sqrt() + y0.sqrt() * z0.sqrt() + z0.sqrt() * x0.sqrt();
        an = (an + lambda) / c(4.);
        x0 = (x0 + lambda) / c(4.);
        y0 = (y0 + lambda) / c(4.);
        z0 = (z0 + lambda) / c(4.);
        mul = mul * c(4.);
    }

    let xx = (a0 - x) / (mul * an);
    let yy = (a0 - y) / (mul * an);
    let zz = -(xx + yy);
    let e2 = xx * yy - zz * zz;
    let e3 = xx * yy * zz;

    // Carlson's eq. (2.34), scaled by 240240 to get integer coefficients
    (e3 * (c(6930.) * e3 + e2 * (c(15015.) * e2 - c(16380.)) + c(17160.))
        + e2 * ((c(10010.) - c(5775.) * e2) * e2 - c(24024.))
        + c(240240.))
        / (c(240240.) * an.sqrt())
}

/// Carlson's degenerate symmetric integral of the third kind,
/// *R_D(x, y, z) = (3/2) ∫₀^∞ [(t + x) (t + y)]^(-½) (t + z)^(-3/2) dt*.
///
/// *x* and *y* must be non-negative, and at most one of them zero;
/// *z* must be positive.
#[allow(clippy::many_single_char_names)]
pub fn rd<T: Real>(x: T, y: T, z: T) -> T {
    let c = T::from_f64;
    let tolerance = (c(0.2 * 0.01) * T::epsilon()).powf(c(1. / 8.));
    let a0 = (x + y + c(3.) * z) / c(5.);
    let q = (a0 - x).abs().max((a0 - y).abs()).max((a0 - z).abs()) / tolerance;

    let (mut an, mut x0, mut y0, mut z0) = (a0, x, y, z);
    let mut mul = T::one();
    let mut sum = T::zero();
    while q >= mul * an.abs() {
        let lambda = x0.sqrt() * y0.sqrt() + y0.sqrt() * z0.sqrt() + z0.sqrt() * x0.sqrt();
        sum = sum + T::one() / (mul * z0.sqrt() * (z0 + lambda));
        an = (an + lambda) / c(4.);
        x0 = (x0 + lambda) / c(4.);
        y0 = (y0 + lambda) / c(4.);
        z0 = (z0 + lambda) / c(4.);
        mul = mul * c(4.);
    }

    let xx = (a0 - x) / (mul * an);
    let yy = (a0 - y) / (mul * an);
    let zz = -(xx + yy) / c(3.);
    let xxyy = xx * yy;
    let zz2 = zz * zz;
    let e2 = xxyy - c(6.) * zz2;
    let e3 = (c(3.) * xxyy - c(8.) * zz2) * zz;
    let e4 = c(3.) * (xxyy - zz2) * zz2;
    let e5 = xxyy * zz2 * zz;

    // Carlson's eq. (2.37), scaled by 4084080 to get integer coefficients
    ((c(471240.) - c(540540.) * e2) * e5
        + (c(612612.) * e2 - c(540540.) * e3 - c(556920.)) * e4
        + e3 * (c(306306.) * e3 + e2 * (c(675675.) * e2 - c(706860.)) + c(680680.))
        + e2 * ((c(417690.) - c(255255.) * e2) * e2 - c(875160.))
        + c(4084080.))
        / (c(4084080.) * mul * an * an.sqrt())
        + c(3.) * sum
}

/// The incomplete elliptic integral of the second kind,
/// *E(𝜙 | k²) = ∫₀^𝜙 √(1 - k² sin²θ) dθ*, for the angle given by its
/// sine and cosine. Negative *k²* (imaginary modulus) is fine.
pub fn incomplete_e<T: Real>(sin_phi: T, cos_phi: T, k2: T) -> T {
    let c2 = cos_phi * cos_phi;
    let s2 = sin_phi * sin_phi;
    let d2 = T::one() - k2 * s2;
    sin_phi * (rf(c2, d2, T::one()) - k2 * s2 * rd(c2, d2, T::one()) / T::from_f64(3.))
}

/// The complete elliptic integral of the second kind, *E(k²) = E(π/2 | k²)*
pub fn complete_e<T: Real>(k2: T) -> T {
    let kp2 = T::one() - k2;
    rf(T::zero(), kp2, T::one()) - k2 * rd(T::zero(), kp2, T::one()) / T::from_f64(3.)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn carlson() {
        // Test values from Carlson (1995)
        assert_float_eq!(rf(1., 2., 0.), 1.311_028_777_146_059_9, rmax <= 2e-15);
        assert_float_eq!(rf(0.5, 1., 0.), 1.854_074_677_301_371_9, rmax <= 2e-15);
        assert_float_eq!(rd(0., 2., 1.), 1.797_210_352_103_388_3, rmax <= 2e-15);
        assert_float_eq!(rd(2., 3., 4.), 0.165_105_272_942_610_53, rmax <= 2e-15);

        // Homogeneity on the diagonal
        assert_float_eq!(rf(4., 4., 4.), 0.5, rmax <= 2e-15);
        assert_float_eq!(rd(4., 4., 4.), 0.125, rmax <= 2e-15);

        // Single precision
        assert_float_eq!(rf(1_f32, 2., 0.), 1.311_028_8, rmax <= 1e-6);
        assert_float_eq!(rd(0_f32, 2., 1.), 1.797_210_4, rmax <= 1e-6);
    }

    #[test]
    fn second_kind() {
        use std::f64::consts::FRAC_PI_2;

        // The circle
        assert_float_eq!(complete_e(0.), FRAC_PI_2, rmax <= 2e-15);
        let (s, c) = 0.7_f64.sin_cos();
        assert_float_eq!(incomplete_e(s, c, 0.), 0.7, rmax <= 2e-15);

        // E(π/2 | k²) = E(k²)
        assert_float_eq!(incomplete_e(1., 0., -0.3), complete_e(-0.3), rmax <= 2e-15);

        // E(𝜙 | 1) = sin 𝜙
        assert_float_eq!(incomplete_e(s, c, 1.), s, rmax <= 2e-15);

        // Odd in 𝜙
        assert_eq!(incomplete_e(-s, c, -0.2), -incomplete_e(s, c, -0.2));

        // Imaginary modulus: E(-e'²) for GRS80, i.e. the quarter meridian
        // in units of the semiminor axis
        let f = 1. / 298.257_222_101;
        let e2 = f * (2. - f);
        let e12 = e2 / (1. - e2);
        let quadrant = 10_001_965.729_230_464;
        let b = 6_378_137. * (1. - f);
        assert_float_eq!(complete_e(-e12) * b, quadrant, rmax <= 1e-14);
    }
}
