//! Main sequence luminosity lookup.
//!
//! Relative luminosities (L☉) for dwarf stars at representative subtypes,
//! rounded from the Pecaut & Mamajek (2013) main sequence table. Subtypes
//! between two entries are interpolated in log space, which follows the
//! roughly exponential fall-off of luminosity along the sequence.

use crate::error::StellarError;
use crate::spectral::{SpectralCode, SpectralType};

/// (class, subtype, luminosity in L☉), ordered along the sequence
const MAIN_SEQUENCE_LUMINOSITY: &[(SpectralType, f64, f64)] = &[
    (SpectralType::O, 3.0, 6.8e5),
    (SpectralType::O, 5.0, 2.8e5),
    (SpectralType::O, 8.0, 8.0e4),
    (SpectralType::B, 0.0, 2.0e4),
    (SpectralType::B, 2.0, 2.5e3),
    (SpectralType::B, 5.0, 5.0e2),
    (SpectralType::B, 8.0, 1.1e2),
    (SpectralType::A, 0.0, 40.0),
    (SpectralType::A, 2.0, 23.0),
    (SpectralType::A, 5.0, 14.0),
    (SpectralType::A, 8.0, 8.0),
    (SpectralType::F, 0.0, 6.2),
    (SpectralType::F, 2.0, 4.8),
    (SpectralType::F, 5.0, 3.2),
    (SpectralType::F, 8.0, 1.95),
    (SpectralType::G, 0.0, 1.26),
    (SpectralType::G, 2.0, 1.0),
    (SpectralType::G, 5.0, 0.79),
    (SpectralType::G, 8.0, 0.62),
    (SpectralType::K, 0.0, 0.46),
    (SpectralType::K, 2.0, 0.32),
    (SpectralType::K, 5.0, 0.17),
    (SpectralType::K, 8.0, 0.10),
    (SpectralType::M, 0.0, 0.069),
    (SpectralType::M, 2.0, 0.036),
    (SpectralType::M, 5.0, 0.004),
    (SpectralType::M, 8.0, 0.0008),
    (SpectralType::M, 9.0, 0.0005),
];

fn sequence_position(class: SpectralType, subtype: f64) -> f64 {
    SpectralCode::new(class, subtype).sequence_position()
}

/// Relative luminosity (L☉) for a parsed spectral code.
///
/// Codes outside the tabulated range (hotter than O3, cooler than M9) are
/// rejected rather than extrapolated.
pub fn luminosity_for_code(code: &SpectralCode) -> Option<f64> {
    let position = code.sequence_position();

    for window in MAIN_SEQUENCE_LUMINOSITY.windows(2) {
        let (class_a, sub_a, lum_a) = window[0];
        let (class_b, sub_b, lum_b) = window[1];
        let pos_a = sequence_position(class_a, sub_a);
        let pos_b = sequence_position(class_b, sub_b);

        if position == pos_a {
            return Some(lum_a);
        }
        if position == pos_b {
            return Some(lum_b);
        }
        if position > pos_a && position < pos_b {
            let t = (position - pos_a) / (pos_b - pos_a);
            let log_l = lum_a.log10() + t * (lum_b.log10() - lum_a.log10());
            return Some(10.0_f64.powf(log_l));
        }
    }

    None
}

/// Relative luminosity (L☉) for a spectral type code such as `"G2"`.
///
/// # Errors
/// [`StellarError::UnknownSpectralType`] when the code cannot be parsed or is
/// not covered by the table.
///
/// # Example
/// ```
/// use stellar::luminosity_for_spectral_type;
///
/// assert_eq!(luminosity_for_spectral_type("G2").unwrap(), 1.0);
/// assert!(luminosity_for_spectral_type("X0").is_err());
/// ```
pub fn luminosity_for_spectral_type(code: &str) -> Result<f64, StellarError> {
    let parsed: SpectralCode = code.parse()?;
    let luminosity = luminosity_for_code(&parsed)
        .ok_or_else(|| StellarError::UnknownSpectralType(code.to_string()))?;

    log::trace!("luminosity for {code}: {luminosity} L☉");
    Ok(luminosity)
}

/// Sum of component luminosities for a multi-star host.
///
/// Flux from widely separated companions superimposes, so the combined
/// luminosity feeds the zone formulas directly.
pub fn combined_luminosity<S: AsRef<str>>(codes: &[S]) -> Result<f64, StellarError> {
    codes
        .iter()
        .map(|code| luminosity_for_spectral_type(code.as_ref()))
        .sum()
}
