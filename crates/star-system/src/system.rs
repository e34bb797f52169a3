//! Loaded star system

use orbits::{BodyCategory, BodyId, BodyRegistry, CelestialBody};
use stellar::{HabitableZone, ZoneResult, combined_luminosity, zones_for_luminosity};

use crate::error::SystemError;

/// A validated body tree with its id registry and host luminosity.
///
/// Loading is the only fallible step for catalog data: orbital elements,
/// radii, parent links and spectral types are all checked here, so per-frame
/// composition never has to re-validate.
#[derive(Debug, Clone)]
pub struct StarSystem {
    root: CelestialBody,
    registry: BodyRegistry,
    luminosity: f64,
}

impl StarSystem {
    pub fn load(root: CelestialBody) -> Result<Self, SystemError> {
        root.validate()?;
        let registry = BodyRegistry::from_root(&root)?;

        let hosts = host_spectral_types(&root);
        if hosts.is_empty() {
            return Err(SystemError::NoHostStar(root.id.clone()));
        }
        let luminosity = combined_luminosity(&hosts)?;

        log::debug!(
            "loaded system {} with {} bodies, hosts {:?}, L = {luminosity:.4}",
            root.id,
            registry.len(),
            hosts
        );

        Ok(Self {
            root,
            registry,
            luminosity,
        })
    }

    /// Parses a catalog tree from JSON and loads it
    pub fn from_json(json: &str) -> Result<Self, SystemError> {
        let root: CelestialBody = serde_json::from_str(json)?;
        Self::load(root)
    }

    pub fn root(&self) -> &CelestialBody {
        &self.root
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    /// Combined luminosity of the host stars (L☉)
    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }

    pub fn body(&self, id: &BodyId) -> Option<&CelestialBody> {
        self.root.iter().find(|body| &body.id == id)
    }

    pub fn habitable_zone(&self) -> HabitableZone {
        HabitableZone::from_luminosity(self.luminosity)
    }

    /// Zone overlays in render units for the given orbital scale
    pub fn zones(&self, orbital_scale: f64) -> Result<Vec<ZoneResult>, SystemError> {
        Ok(zones_for_luminosity(self.luminosity)?
            .into_iter()
            .map(|zone| zone.scaled(orbital_scale))
            .collect())
    }
}

/// Spectral types of the stars whose light defines the zones: the root star,
/// or the stars orbiting a barycenter root.
fn host_spectral_types(root: &CelestialBody) -> Vec<&str> {
    match &root.category {
        BodyCategory::Star { spectral_type } => vec![spectral_type.as_str()],
        _ => root
            .children
            .iter()
            .filter_map(|child| child.category.spectral_type())
            .collect(),
    }
}
