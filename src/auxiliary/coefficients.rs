use crate::internal::*;
use once_cell::sync::OnceCell;
use std::fmt::Debug;

/// Provider of the Fourier coefficients of the conversions between
/// auxiliary latitudes, i.e. of the cₖ in
///
/// 𝜁_to = 𝜁_from + Σ cₖ sin(2k 𝜁_from),  k ∈ {1, ... , L_MAX}
///
/// Element `k-1` of the returned array is the coefficient of sin(2k 𝜁_from).
/// [DAuxLatitude](crate::DAuxLatitude) calls [fill](CoefficientFiller::fill)
/// at most once per ordered pair of distinct kinds, and caches the result.
pub trait CoefficientFiller<T: Real>: Debug + Send + Sync {
    fn fill(&self, aux: &AuxLatitude<T>, from: AuxKind, to: AuxKind) -> [T; L_MAX];
}

/// The built-in [CoefficientFiller]: projects 𝜁_to - 𝜁_from onto the
/// sines, by the trapezoidal rule in geographic latitude.
///
/// The integrands are smooth and periodic, so the quadrature converges
/// exponentially: 64 nodes per quarter meridian give full double precision
/// for any terrestrial flattening.
#[derive(Clone, Copy, Debug)]
pub struct Quadrature {
    nodes: usize,
}

impl Quadrature {
    #[must_use]
    pub fn new(nodes: usize) -> Quadrature {
        Quadrature {
            nodes: nodes.max(2 * L_MAX),
        }
    }

    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }
}

impl Default for Quadrature {
    fn default() -> Quadrature {
        Quadrature::new(64)
    }
}

impl<T: Real> CoefficientFiller<T> for Quadrature {
    // cₖ = (4/π) ∫₀^(π/2) (𝜁_to - 𝜁_from) sin(2k 𝜁_from) d𝜁_from,
    // substituting 𝜁_from = 𝜁_from(𝜙). The end points contribute nothing.
    fn fill(&self, aux: &AuxLatitude<T>, from: AuxKind, to: AuxKind) -> [T; L_MAX] {
        let mut c = [T::zero(); L_MAX];
        let m = T::from_f64(self.nodes as f64);
        let step = T::FRAC_PI_2() / m;

        for j in 1..self.nodes {
            let phi = AuxAngle::from_radians(T::from_f64(j as f64) * step);
            let zin = aux.from_geographic(from, &phi).radians();
            let zout = aux.from_geographic(to, &phi).radians();
            let weight = (zout - zin) * aux.derivative(from, &phi);
            for (k, ck) in c.iter_mut().enumerate() {
                let order = T::from_f64(2. * (k + 1) as f64);
                *ck = *ck + weight * (order * zin).sin();
            }
        }

        let scale = T::from_f64(2.) / m;
        c.iter_mut().for_each(|ck| *ck = *ck * scale);
        c
    }
}

/// One lazily filled coefficient table per ordered pair of kinds, indexed
/// as given by [ind]. Each slot is filled at most once, even when several
/// threads ask for it at the same time.
#[derive(Debug)]
pub(crate) struct CoefficientCache<T: Real> {
    slots: Vec<OnceCell<[T; L_MAX]>>,
}

impl<T: Real> CoefficientCache<T> {
    pub(crate) fn new() -> CoefficientCache<T> {
        let slots = (0..AUX_NUMBER * AUX_NUMBER).map(|_| OnceCell::new()).collect();
        CoefficientCache { slots }
    }

    /// The coefficients in `slot`, computed by `fill` if not already there
    pub(crate) fn get_or_fill<F>(&self, slot: usize, fill: F) -> Option<&[T; L_MAX]>
    where
        F: FnOnce() -> [T; L_MAX],
    {
        Some(self.slots.get(slot)?.get_or_init(fill))
    }

    pub(crate) fn is_filled(&self, slot: usize) -> bool {
        self.slots.get(slot).map_or(false, |cell| cell.get().is_some())
    }
}

// ----- Tests ---------------------------------------------------------------------
