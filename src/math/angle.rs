use super::Real;

/// A latitude-like angle, represented by the pair (y, x), where y is
/// proportional to the sine and x to the cosine of the angle.
///
/// The pair need not be normalized: `(tan 𝜙, 1)` represents 𝜙 just as well
/// as `(sin 𝜙, cos 𝜙)` does, and lets the poles be represented exactly, as
/// `(∞, 1)` or `(1, 0)`. The [tangent](AuxAngle::tan) is well defined for
/// all representations, and may be ±∞ (at the poles) or NaN (for the
/// meaningless (0, 0) and (∞, ∞) pairs).
///
/// Note that the sign of x is not constrained: callers working on
/// latitudes, i.e. on [-90°, 90°], must keep x ≥ 0 themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuxAngle<T: Real> {
    y: T,
    x: T,
}

impl<T: Real> AuxAngle<T> {
    #[must_use]
    pub fn new(y: T, x: T) -> AuxAngle<T> {
        AuxAngle { y, x }
    }

    /// The angle with tangent `tan`. Infinite tangents give the poles.
    #[must_use]
    pub fn from_tan(tan: T) -> AuxAngle<T> {
        AuxAngle::new(tan, T::one())
    }

    #[must_use]
    pub fn from_radians(radians: T) -> AuxAngle<T> {
        let (y, x) = radians.sin_cos();
        AuxAngle::new(y, x)
    }

    /// The angle `degrees`, with the trigonometric functions reduced exactly
    /// to the first octant, so multiples of 90° come out with exact zeros.
    #[must_use]
    pub fn from_degrees(degrees: T) -> AuxAngle<T> {
        let zero = T::zero();
        let quarter = T::from_f64(90.);
        let mut r = degrees % T::from_f64(360.);
        let q = (r / quarter).round();
        r = r - quarter * q;
        let (s, c) = r.to_radians().sin_cos();
        // Subtracting from zero rather than negating keeps exact zeros positive,
        // so e.g. 90° comes out as (1, +0), with tangent +∞
        let quadrant = q.to_i64().unwrap_or(0).rem_euclid(4);
        match quadrant {
            0 => AuxAngle::new(s, c),
            1 => AuxAngle::new(c, zero - s),
            2 => AuxAngle::new(zero - s, zero - c),
            _ => AuxAngle::new(zero - c, s),
        }
    }

    /// The sine-like component
    #[must_use]
    pub fn y(&self) -> T {
        self.y
    }

    /// The cosine-like component
    #[must_use]
    pub fn x(&self) -> T {
        self.x
    }

    /// The tangent, y/x: ±∞ at the poles
    #[must_use]
    pub fn tan(&self) -> T {
        self.y / self.x
    }

    /// The angle in radians, on (-π, π]
    #[must_use]
    pub fn radians(&self) -> T {
        self.y.atan2(self.x)
    }

    #[must_use]
    pub fn degrees(&self) -> T {
        self.radians().to_degrees()
    }

    /// The same angle with its components scaled onto the unit circle,
    /// i.e. `(sin, cos)`. Meaningless pairs, (0, 0), (∞, ∞), or pairs with
    /// a NaN component, normalize to (NaN, NaN).
    #[must_use]
    pub fn normalized(&self) -> AuxAngle<T> {
        if self.tan().is_nan() {
            return AuxAngle::new(T::nan(), T::nan());
        }
        // Prescale by the larger component, so hypot cannot overflow
        let m = self.y.abs().max(self.x.abs());
        let (mut y, mut x) = (self.y / m, self.x / m);
        // m = ∞ means that exactly one of the components is infinite, hence ±1
        if y.is_nan() {
            y = self.y.signum();
        }
        if x.is_nan() {
            x = self.x.signum();
        }
        let r = y.hypot(x);
        AuxAngle::new(y / r, x / r)
    }

    /// The reflection of the angle into the northern hemisphere
    #[must_use]
    pub fn abs_y(&self) -> AuxAngle<T> {
        AuxAngle::new(self.y.abs(), self.x)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn constructors() {
        let a = AuxAngle::<f64>::from_degrees(90.);
        assert_eq!(a.y(), 1.);
        assert_eq!(a.x(), 0.);
        assert_eq!(a.tan(), f64::INFINITY);
        assert_eq!(a.degrees(), 90.);

        let a = AuxAngle::<f64>::from_degrees(-90.);
        assert_eq!(a.tan(), f64::NEG_INFINITY);
        assert_eq!(a.degrees(), -90.);

        let a = AuxAngle::<f64>::from_degrees(0.);
        assert_eq!(a.tan(), 0.);
        assert_eq!(a.radians(), 0.);

        let a = AuxAngle::<f64>::from_degrees(30.);
        assert_float_eq!(a.y(), 0.5, abs <= 1e-16);
        assert_float_eq!(a.degrees(), 30., abs <= 1e-13);

        let a = AuxAngle::<f64>::from_degrees(405.);
        assert_float_eq!(a.degrees(), 45., abs <= 1e-13);

        let a = AuxAngle::<f64>::from_radians(1.);
        assert_float_eq!(a.radians(), 1., abs <= 1e-15);

        let a = AuxAngle::<f32>::from_tan(1.);
        assert_float_eq!(a.degrees(), 45., abs <= 1e-5);
    }

    #[test]
    fn normalization() {
        let a = AuxAngle::new(3_f64, 4.).normalized();
        assert_float_eq!(a.y(), 0.6, abs <= 1e-16);
        assert_float_eq!(a.x(), 0.8, abs <= 1e-16);

        // The poles, given by infinite tangent
        let a = AuxAngle::from_tan(f64::INFINITY).normalized();
        assert_eq!((a.y(), a.x()), (1., 0.));
        let a = AuxAngle::from_tan(f64::NEG_INFINITY).normalized();
        assert_eq!((a.y(), a.x()), (-1., 0.));

        // Very large, but finite, components
        let a = AuxAngle::new(f64::MAX, 1.).normalized();
        assert_eq!(a.y(), 1.);
        let a = AuxAngle::new(f64::MAX, f64::MAX).normalized();
        assert_float_eq!(a.y(), std::f64::consts::FRAC_1_SQRT_2, abs <= 1e-16);
        assert_float_eq!(a.x(), std::f64::consts::FRAC_1_SQRT_2, abs <= 1e-16);
        let a = AuxAngle::new(-f64::MAX, f64::MAX / 2.).normalized();
        assert_float_eq!(a.degrees(), -63.434_948_822_922_01, abs <= 1e-12);
        let a = AuxAngle::new(f32::MAX, f32::MAX).normalized();
        assert_float_eq!(a.degrees(), 45., abs <= 1e-5);

        // Meaningless pairs
        assert!(AuxAngle::new(0_f64, 0.).normalized().y().is_nan());
        assert!(AuxAngle::new(f64::INFINITY, f64::INFINITY)
            .normalized()
            .x()
            .is_nan());
        assert!(AuxAngle::new(f64::NAN, 1.).normalized().x().is_nan());

        // Reflection
        let a = AuxAngle::<f64>::from_degrees(-30.).abs_y();
        assert_float_eq!(a.degrees(), 30., abs <= 1e-13);
    }
}
