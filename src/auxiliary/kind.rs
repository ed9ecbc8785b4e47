use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The number of auxiliary latitude kinds, i.e. the variants of [AuxKind]
pub const AUX_NUMBER: usize = 6;

/// The auxiliary latitudes which can be converted into each other by
/// Fourier series. The discriminants are the indices used for the
/// coefficient tables, and by [ind].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuxKind {
    /// Geographic (geodetic) latitude, 𝜙
    Geographic = 0,
    /// Parametric (reduced) latitude, 𝛽
    Parametric = 1,
    /// Geocentric latitude, 𝜃
    Geocentric = 2,
    /// Rectifying latitude, 𝜇
    Rectifying = 3,
    /// Conformal latitude, 𝜒
    Conformal = 4,
    /// Authalic latitude, 𝜉
    Authalic = 5,
}

impl AuxKind {
    pub const ALL: [AuxKind; AUX_NUMBER] = [
        AuxKind::Geographic,
        AuxKind::Parametric,
        AuxKind::Geocentric,
        AuxKind::Rectifying,
        AuxKind::Conformal,
        AuxKind::Authalic,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<AuxKind> {
        AuxKind::ALL.get(index).copied()
    }

    /// The conventional Greek letter
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            AuxKind::Geographic => "𝜙",
            AuxKind::Parametric => "𝛽",
            AuxKind::Geocentric => "𝜃",
            AuxKind::Rectifying => "𝜇",
            AuxKind::Conformal => "𝜒",
            AuxKind::Authalic => "𝜉",
        }
    }
}

/// Index of the coefficient table for the conversion from `auxin` to
/// `auxout`, or `None` if any of the two is not a valid kind index.
#[must_use]
pub fn ind(auxout: usize, auxin: usize) -> Option<usize> {
    if auxout >= AUX_NUMBER || auxin >= AUX_NUMBER {
        return None;
    }
    Some(AUX_NUMBER * auxout + auxin)
}

impl fmt::Display for AuxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuxKind::Geographic => "geographic",
            AuxKind::Parametric => "parametric",
            AuxKind::Geocentric => "geocentric",
            AuxKind::Rectifying => "rectifying",
            AuxKind::Conformal => "conformal",
            AuxKind::Authalic => "authalic",
        };
        write!(f, "{name}")
    }
}

impl FromStr for AuxKind {
    type Err = Error;

    /// The full name, the common alternative name, or the
    /// transliterated Greek letter
    fn from_str(s: &str) -> Result<AuxKind, Error> {
        match s.trim().to_lowercase().as_str() {
            "geographic" | "geodetic" | "phi" => Ok(AuxKind::Geographic),
            "parametric" | "reduced" | "beta" => Ok(AuxKind::Parametric),
            "geocentric" | "theta" => Ok(AuxKind::Geocentric),
            "rectifying" | "mu" => Ok(AuxKind::Rectifying),
            "conformal" | "chi" => Ok(AuxKind::Conformal),
            "authalic" | "xi" => Ok(AuxKind::Authalic),
            _ => Err(Error::NotFound(
                String::from(s),
                String::from(": not an auxiliary latitude"),
            )),
        }
    }
}

// ----- Tests ---------------------------------------------------------------------
