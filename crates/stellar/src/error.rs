use thiserror::Error;

/// Errors raised by stellar lookups and zone calculations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StellarError {
    /// The code is not a main sequence type covered by the luminosity table.
    ///
    /// Callers get no substitute luminosity; a guessed value would misplace
    /// the habitable zone.
    #[error("unknown spectral type: {0:?}")]
    UnknownSpectralType(String),

    /// Luminosity must be finite and strictly positive
    #[error("invalid stellar luminosity: {0}")]
    InvalidLuminosity(f64),
}
