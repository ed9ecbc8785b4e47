mod constants;

use crate::internal::*;

/// An ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 1. / 298.257_222_101)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Predefined ellipsoid; built-in, or given as a string formatted
    /// (a, rf) tuple, e.g. "6378137, 298.25". A negative rf gives a
    /// prolate ellipsoid
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        // Is it one of the few builtins?
        if let Some(e) = constants::ELLIPSOID_LIST
            .iter()
            .find(|ellps| ellps.0 == name)
        {
            // EPSG convention: zero reciproque flattening indicates zero flattening
            let f = if e.2 != 0.0 { 1.0 / e.2 } else { 0.0 };
            return Ok(Ellipsoid::new(e.1, f));
        }

        // Remove optional parenthesis
        let mut definition = name.trim();
        if let Some(inner) = definition
            .strip_prefix('(')
            .and_then(|d| d.strip_suffix(')'))
        {
            definition = inner;
        }

        // The "semimajor, reciproque-flattening" form, e.g. "6378137, 298.3"
        let a_and_rf = definition.split(',').map(str::trim).collect::<Vec<_>>();
        if a_and_rf.len() != 2 {
            warn!("Unknown ellipsoid: {name}");
            return Err(Error::NotFound(
                String::from(name),
                String::from(": Ellipsoid::named()"),
            ));
        }

        let parse = |value: &str, what: &str| {
            value
                .parse::<f64>()
                .map_err(|_| Error::BadParam(String::from(what), String::from(value)))
        };
        let a = parse(a_and_rf[0], "a")?;
        let rf = parse(a_and_rf[1], "rf")?;
        if !a.is_finite() || a <= 0.0 {
            return Err(Error::BadParam(String::from("a"), String::from(a_and_rf[0])));
        }
        let f = if rf != 0.0 { 1.0 / rf } else { 0.0 };
        if f.is_nan() || f >= 1.0 {
            return Err(Error::BadParam(String::from("rf"), String::from(a_and_rf[1])));
        }
        Ok(Ellipsoid::new(a, f))
    }

    /// The names of the built-in ellipsoids, with descriptions
    pub fn builtins() -> impl Iterator<Item = (&'static str, &'static str)> {
        constants::ELLIPSOID_LIST.iter().map(|e| (e.0, e.3))
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*. Negative if b > a.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    /// The aspect ratio, *b / a  =  1 - f  =  sqrt(1 - e²)*
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        1.0 - self.f
    }

    /// The rectifying radius, i.e. the radius of the sphere having the
    /// meridian length of the ellipsoid
    #[must_use]
    pub fn rectifying_radius(&self) -> f64 {
        AuxLatitude::new(self.f).rectifying_radius(self.a)
    }
}

// ----- Tests ---------------------------------------------------------------------
