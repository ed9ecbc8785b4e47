use crate::internal::*;

/// The ellipsoid constants, and the exact conversions from geographic
/// latitude to the other auxiliary latitudes.
///
/// Everything is computed for an ellipsoid with unit semimajor axis:
/// the auxiliary latitudes depend on the shape only. Negative flattening,
/// i.e. a prolate ellipsoid, is supported throughout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuxLatitude<T: Real> {
    f: T,
    fm1: T,
    e2: T,
    e2m1: T,
    e12: T,
    e: T,
    e1: T,
    n: T,
    // Rectifying radius, for a = 1
    rr: T,
    // q(𝜙) at the pole, for the authalic latitude
    qp: T,
}

impl<T: Real> AuxLatitude<T> {
    /// Ellipsoid constants for flattening `f`
    #[must_use]
    pub fn new(f: T) -> AuxLatitude<T> {
        let one = T::one();
        let e2 = f * (T::from_f64(2.) - f);
        let e12 = e2 / (one - e2);
        let fm1 = one - f;
        let mut aux = AuxLatitude {
            f,
            fm1,
            e2,
            e2m1: one - e2,
            e12,
            e: e2.abs().sqrt(),
            e1: e12.abs().sqrt(),
            n: f / (T::from_f64(2.) - f),
            rr: fm1 * elliptic::complete_e(-e12) / T::FRAC_PI_2(),
            qp: T::nan(),
        };
        aux.qp = aux.q(one);
        aux
    }

    #[must_use]
    pub fn from_ellipsoid(ellps: &Ellipsoid) -> AuxLatitude<T> {
        AuxLatitude::new(T::from_f64(ellps.flattening()))
    }

    // ----- Constants -------------------------------------------------------------

    /// The flattening, *f*
    #[must_use]
    pub fn flattening(&self) -> T {
        self.f
    }

    /// *1 - f*
    #[must_use]
    pub fn fm1(&self) -> T {
        self.fm1
    }

    /// The squared eccentricity, *e² = f (2 - f)*. Negative for prolate ellipsoids
    #[must_use]
    pub fn e2(&self) -> T {
        self.e2
    }

    /// *1 - e²  =  (1 - f)²*
    #[must_use]
    pub fn e2m1(&self) -> T {
        self.e2m1
    }

    /// The squared second eccentricity, *e'² = e² / (1 - e²)*
    #[must_use]
    pub fn e12(&self) -> T {
        self.e12
    }

    /// *√|e²|*
    #[must_use]
    pub fn e(&self) -> T {
        self.e
    }

    /// *√|e'²|*
    #[must_use]
    pub fn e1(&self) -> T {
        self.e1
    }

    /// The third flattening, *n = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> T {
        self.n
    }

    /// The rectifying radius, i.e. the radius of the sphere with the same
    /// meridian length as the ellipsoid with semimajor axis `a`
    #[must_use]
    pub fn rectifying_radius(&self, a: T) -> T {
        a * self.rr
    }

    /// *atanh(e sn(t)) / e* for *t = tan 𝜙*, or the corresponding
    /// *atan(|e| sn(t)) / |e|* for prolate ellipsoids
    #[must_use]
    pub fn atanhee(&self, tphi: T) -> T {
        self.atanhee_sin(sn(tphi))
    }

    fn atanhee_sin(&self, sphi: T) -> T {
        if self.e2 > T::zero() {
            return (self.e * sphi).atanh() / self.e;
        }
        if self.e2 < T::zero() {
            return (self.e * sphi).atan() / self.e;
        }
        sphi
    }

    // The q-function of the authalic latitude, [Snyder, 1987](crate::Bibliography::Sny87) eq. 3-12
    fn q(&self, sphi: T) -> T {
        let one = T::one();
        self.e2m1 * (sphi / (one - self.e2 * sphi * sphi) + self.atanhee_sin(sphi))
    }

    // ----- Conversions from the geographic latitude -------------------------------

    /// Geographic latitude, 𝜙, to parametric, 𝛽: *tan 𝛽 = (1 - f) tan 𝜙*
    #[must_use]
    pub fn parametric(&self, phi: &AuxAngle<T>) -> AuxAngle<T> {
        AuxAngle::new(self.fm1 * phi.y(), phi.x())
    }

    /// Geographic latitude, 𝜙, to geocentric, 𝜃: *tan 𝜃 = (1 - e²) tan 𝜙*
    #[must_use]
    pub fn geocentric(&self, phi: &AuxAngle<T>) -> AuxAngle<T> {
        AuxAngle::new(self.e2m1 * phi.y(), phi.x())
    }

    /// Geographic latitude, 𝜙, to rectifying, 𝜇: the meridian distance,
    /// *b E(𝛽 | -e'²)*, in units of the rectifying radius
    #[must_use]
    pub fn rectifying(&self, phi: &AuxAngle<T>) -> AuxAngle<T> {
        let beta = self.parametric(phi).normalized();
        let m = elliptic::incomplete_e(beta.y(), beta.x(), -self.e12);
        AuxAngle::from_radians(self.fm1 * m / self.rr)
    }

    /// Geographic latitude, 𝜙, to conformal, 𝜒, following
    /// [Karney, 2011](crate::Bibliography::Kar11) eq. (7)
    #[must_use]
    pub fn conformal(&self, phi: &AuxAngle<T>) -> AuxAngle<T> {
        let tphi = phi.tan();
        // The poles, and garbage, map to themselves
        if !tphi.is_finite() {
            return *phi;
        }
        let sig = (self.e2 * self.atanhee(tphi)).sinh();
        AuxAngle::from_tan(tphi * sc(sig) - sig * sc(tphi))
    }

    /// Geographic latitude, 𝜙, to authalic, 𝜉: *sin 𝜉 = q(𝜙) / q(π/2)*
    #[must_use]
    pub fn authalic(&self, phi: &AuxAngle<T>) -> AuxAngle<T> {
        let one = T::one();
        let sxi = self.q(phi.normalized().y()) / self.qp;
        let cxi = ((one - sxi) * (one + sxi)).max(T::zero()).sqrt();
        AuxAngle::new(sxi, cxi)
    }

    /// Geographic latitude, 𝜙, to any auxiliary latitude
    #[must_use]
    pub fn from_geographic(&self, kind: AuxKind, phi: &AuxAngle<T>) -> AuxAngle<T> {
        match kind {
            AuxKind::Geographic => *phi,
            AuxKind::Parametric => self.parametric(phi),
            AuxKind::Geocentric => self.geocentric(phi),
            AuxKind::Rectifying => self.rectifying(phi),
            AuxKind::Conformal => self.conformal(phi),
            AuxKind::Authalic => self.authalic(phi),
        }
    }

    /// The derivative, d𝜁/d𝜙, of the auxiliary latitude 𝜁 of the given
    /// kind, with respect to the geographic latitude, 𝜙. The derivatives
    /// of the conformal and authalic latitudes are indeterminate at the poles.
    #[must_use]
    pub fn derivative(&self, kind: AuxKind, phi: &AuxAngle<T>) -> T {
        let one = T::one();
        let phi = phi.normalized();
        let (s2, c) = (phi.y() * phi.y(), phi.x());
        let c2 = c * c;
        match kind {
            AuxKind::Geographic => one,
            AuxKind::Parametric => self.fm1 / (c2 + self.e2m1 * s2),
            AuxKind::Geocentric => self.e2m1 / (c2 + self.e2m1 * self.e2m1 * s2),
            AuxKind::Rectifying => {
                let beta = self.parametric(&phi).normalized();
                let dmu_dbeta = self.fm1 / self.rr * (one + self.e12 * beta.y() * beta.y()).sqrt();
                dmu_dbeta * self.derivative(AuxKind::Parametric, &phi)
            }
            AuxKind::Conformal => {
                let chi = self.conformal(&phi).normalized();
                chi.x() * self.e2m1 / (c * (one - self.e2 * s2))
            }
            AuxKind::Authalic => {
                let xi = self.authalic(&phi);
                let w = one - self.e2 * s2;
                T::from_f64(2.) * self.e2m1 * c / (w * w * self.qp * xi.x())
            }
        }
    }
}

// ----- Tests ---------------------------------------------------------------------
