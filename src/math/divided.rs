//! Divided differences, *(f(y) - f(x)) / (y - x)*, of a few elementary
//! functions, evaluated without the cancellation of the naive quotient.
//! For *x = y* the functions return the derivative, *f'(x)*.
//!
//! The formulas follow [Karney, 2023](crate::Bibliography::Kar23).

use super::Real;

/// *sc(t) = √(1 + t²)*, i.e. the secant of the angle with tangent *t*
#[inline]
pub fn sc<T: Real>(t: T) -> T {
    T::one().hypot(t)
}

/// *sn(t) = t / √(1 + t²)*, i.e. the sine of the angle with tangent *t*.
/// Returns ±1 for infinite *t*.
#[inline]
pub fn sn<T: Real>(t: T) -> T {
    if t.is_infinite() {
        return t.signum();
    }
    t / sc(t)
}

/// Divided difference of sin(x)
pub fn dsin<T: Real>(x: T, y: T) -> T {
    let two = T::from_f64(2.);
    let d = (x - y) / two;
    let sinc = if d != T::zero() { d.sin() / d } else { T::one() };
    ((x + y) / two).cos() * sinc
}

/// Divided difference of [sn](sn), i.e. of *t / √(1 + t²)*
pub fn dsn<T: Real>(x: T, y: T) -> T {
    let scx = sc(x);
    if x == y {
        return T::one() / (scx * (T::one() + x * x));
    }
    let (scy, snx, sny) = (sc(y), sn(x), sn(y));
    if x * y > T::zero() {
        // (sny - snx) (sny + snx) = (y² - x²) / (scx² scy²)
        (snx / scy + sny / scx) / ((snx + sny) * scx * scy)
    } else {
        (sny - snx) / (y - x)
    }
}

/// Divided difference of atan(x)
pub fn datan<T: Real>(x: T, y: T) -> T {
    let (d, xy) = (y - x, x * y);
    let one = T::one();
    if x == y {
        return one / (one + xy);
    }
    // Both infinite, with the same sign
    if xy.is_infinite() && xy > T::zero() {
        return T::zero();
    }
    // atan(y) - atan(x) = atan((y - x) / (1 + xy)), if 1 + xy > 0
    if T::from_f64(2.) * xy > -one {
        return (d / (one + xy)).atan() / d;
    }
    (y.atan() - x.atan()) / d
}

/// Divided difference of asinh(x)
pub fn dasinh<T: Real>(x: T, y: T) -> T {
    let (d, xy) = (y - x, x * y);
    let (hx, hy) = (sc(x), sc(y));
    let one = T::one();
    if x == y {
        return one / hx;
    }
    if d.is_infinite() {
        return T::zero();
    }
    if xy > T::zero() {
        // asinh(y) - asinh(x) = asinh(y hx - x hy) = asinh(d (x + y) / (x hy + y hx))
        let arg = if xy < one {
            (x + y) / (x * hy + y * hx)
        } else {
            (one / x + one / y) / (hy / y + hx / x)
        };
        return (d * arg).asinh() / d;
    }
    (y.asinh() - x.asinh()) / d
}

// ----- Tests ---------------------------------------------------------------------
