use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::StellarError;

/// Main sequence spectral classes, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    /// Position in the temperature sequence (O = 0 … M = 6)
    pub fn rank(&self) -> u8 {
        match self {
            SpectralType::O => 0,
            SpectralType::B => 1,
            SpectralType::A => 2,
            SpectralType::F => 3,
            SpectralType::G => 4,
            SpectralType::K => 5,
            SpectralType::M => 6,
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'O' => Some(SpectralType::O),
            'B' => Some(SpectralType::B),
            'A' => Some(SpectralType::A),
            'F' => Some(SpectralType::F),
            'G' => Some(SpectralType::G),
            'K' => Some(SpectralType::K),
            'M' => Some(SpectralType::M),
            _ => None,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// A parsed spectral classification code such as `G2`, `K1.5` or `M4V`.
///
/// Parsing ignores case. A bare class letter (`"K"`) stands for the middle of
/// the class, subtype 5.
/// Only the main sequence luminosity class `V` may follow the subtype; giants
/// and supergiants are rejected because their luminosity is not described by
/// the main sequence table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralCode {
    pub class: SpectralType,
    /// Subtype in `[0, 10)`
    pub subtype: f64,
}

impl SpectralCode {
    pub const DEFAULT_SUBTYPE: f64 = 5.0;

    pub fn new(class: SpectralType, subtype: f64) -> Self {
        Self { class, subtype }
    }

    /// Continuous position along the O0 … M9 sequence
    pub fn sequence_position(&self) -> f64 {
        f64::from(self.class.rank()) * 10.0 + self.subtype
    }
}

impl FromStr for SpectralCode {
    type Err = StellarError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let unknown = || StellarError::UnknownSpectralType(code.to_string());
        let trimmed = code.trim();

        let mut chars = trimmed.chars();
        let class = chars
            .next()
            .and_then(SpectralType::from_letter)
            .ok_or_else(unknown)?;

        let rest = chars.as_str();
        let digits_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, suffix) = rest.split_at(digits_end);

        if !(suffix.is_empty() || suffix.eq_ignore_ascii_case("V")) {
            return Err(unknown());
        }

        let subtype = if number.is_empty() {
            Self::DEFAULT_SUBTYPE
        } else {
            number.parse::<f64>().map_err(|_| unknown())?
        };

        if !(0.0..10.0).contains(&subtype) {
            return Err(unknown());
        }

        Ok(Self { class, subtype })
    }
}

impl fmt::Display for SpectralCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.class, self.subtype)
    }
}
