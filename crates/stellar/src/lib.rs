//! Spectral luminosity lookup and stellar zone boundaries.

pub mod error;
pub mod luminosity;
pub mod spectral;
pub mod zones;

#[cfg(test)]
mod spectral_test;
#[cfg(test)]
mod zones_test;

pub use error::StellarError;
pub use luminosity::{combined_luminosity, luminosity_for_code, luminosity_for_spectral_type};
pub use spectral::{SpectralCode, SpectralType};
pub use zones::{
    HabitableZone, StellarHost, ZoneKind, ZoneResult, habitable_zone_inner, habitable_zone_outer,
    snow_line, sublimation_radius, zones_for_luminosity,
};
