use super::Real;

// --- Fourier series summation using Clenshaw's recurrence ---

pub mod fourier {
    use super::Real;

    /// Evaluate Σ cᵢ sin( i · arg ), for i ∈ {order, ... , 1}, using Clenshaw summation
    pub fn sin<T: Real>(arg: T, coefficients: &[T]) -> T {
        let (sin_arg, cos_arg) = arg.sin_cos();
        let x = T::from_f64(2.0) * cos_arg;
        let mut c0 = T::zero();
        let mut c1 = T::zero();

        for &c in coefficients.iter().rev() {
            (c1, c0) = (c0, x.mul_add(c0, c - c1));
        }
        sin_arg * c0
    }

    /// Evaluate Σ cᵢ cos( i · arg ), for i ∈ {order, ... , 1}, using Clenshaw summation
    pub fn cos<T: Real>(arg: T, coefficients: &[T]) -> T {
        let cos_arg = arg.cos();
        let x = T::from_f64(2.0) * cos_arg;
        let mut c0 = T::zero();
        let mut c1 = T::zero();

        for &c in coefficients.iter().rev() {
            (c1, c0) = (c0, x.mul_add(c0, c - c1));
        }
        cos_arg * c0 - c1
    }
}

// --- The divided difference of a Fourier series ---

/// Evaluate the divided difference
///
/// (Σ cₖ sin((2k+2) 𝜁₂) - Σ cₖ sin((2k+2) 𝜁₁)) / Δ,  k ∈ {0, ... , K-1}
///
/// (or the same with cos for sin, if `sinp` is false), by a Clenshaw
/// recurrence on 2×2 matrices, so the two sums, which may be large
/// and nearly equal, are never formed ([Karney, 2023](crate::Bibliography::Kar23)).
///
/// The angles are given by their sines and cosines. Δ must be
/// **either** exactly 1, giving the plain difference, **or** 𝜁₂ - 𝜁₁ in
/// radians, giving the divided difference. Any other value gives
/// nonsense: this is not checked.
#[allow(clippy::too_many_arguments)]
pub fn divided_clenshaw<T: Real>(
    sinp: bool,
    delta: T,
    szet1: T,
    czet1: T,
    szet2: T,
    czet2: T,
    coefficients: &[T],
) -> T {
    let (zero, one, two) = (T::zero(), T::one(), T::from_f64(2.));

    // Sum and difference angles. The suffixes a and b denote the [1,1]
    // and [2,1] elements of the matrices and vectors of the recurrence
    let d2 = delta * delta;
    let czetp = czet2 * czet1 - szet2 * szet1;
    let szetp = szet2 * czet1 + czet2 * szet1;
    let czetm = czet2 * czet1 + szet2 * szet1;
    // sin(𝜁₂ - 𝜁₁) / Δ
    let szetmd = if delta == one {
        szet2 * czet1 - czet2 * szet1
    } else if delta != zero {
        delta.sin() / delta
    } else {
        one
    };
    let xa = two * czetp * czetm;
    let xb = -two * szetp * szetmd;

    // U0 and U1 accumulate the sum
    let (mut u0a, mut u0b, mut u1a, mut u1b) = (zero, zero, zero, zero);
    for &c in coefficients.iter().rev() {
        // T = X · U0 - U1 + c · I;  U1 = U0;  U0 = T
        let ta = xa * u0a + d2 * xb * u0b - u1a + c;
        let tb = xb * u0a + xa * u0b - u1b;
        (u1a, u0a) = (u0a, ta);
        (u1b, u0b) = (u0b, tb);
    }

    // P = U0 · F[0] - U1 · F[-1], where, for the sine series,
    //   F[0]  = [sin 2𝜁₂ + sin 2𝜁₁, (sin 2𝜁₂ - sin 2𝜁₁) / Δ]
    //         = 2 [szetp · czetm, czetp · szetmd]
    //   F[-1] = [0, 0]
    // and for the cosine series
    //   F[0]  = 2 [czetp · czetm, -szetp · szetmd]
    //   F[-1] = [2, 0]
    // Only the second element of P, the divided difference, is needed
    let (f0a, f0b, fm1a) = if sinp {
        (szetp * czetm, czetp * szetmd, zero)
    } else {
        (czetp * czetm, -szetp * szetmd, one)
    };
    two * (f0a * u0b + f0b * u0a - fm1a * u1b)
}

// ----- Tests ---------------------------------------------------------------------
