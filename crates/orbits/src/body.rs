//! Celestial body hierarchy and flat id registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use units::Length;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::elements::OrbitalElements;
use crate::error::OrbitError;

/// Catalog identifier of a body
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Closed set of catalog body categories.
///
/// Serialized as an internally tagged record (`{"type": "gasGiant"}`); an
/// unrecognized `type` fails deserialization with
/// [`OrbitError::UnknownBodyCategory`] instead of falling through to a generic
/// body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase",
    try_from = "CategoryRecord"
)]
pub enum BodyCategory {
    Star { spectral_type: String },
    Terrestrial,
    GasGiant,
    /// Stations, jump points and other non-natural objects
    Special,
    /// Massless center of a multi-star system
    Barycenter,
}

impl BodyCategory {
    pub fn kind(&self) -> BodyKind {
        match self {
            Self::Star { .. } => BodyKind::Star,
            Self::Terrestrial => BodyKind::Terrestrial,
            Self::GasGiant => BodyKind::GasGiant,
            Self::Special => BodyKind::Special,
            Self::Barycenter => BodyKind::Barycenter,
        }
    }

    pub fn spectral_type(&self) -> Option<&str> {
        match self {
            Self::Star { spectral_type } => Some(spectral_type),
            _ => None,
        }
    }
}

/// Wire form of [`BodyCategory`] before the tag is checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    spectral_type: Option<String>,
}

impl TryFrom<CategoryRecord> for BodyCategory {
    type Error = OrbitError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Ok(match record.kind.parse::<BodyKind>()? {
            BodyKind::Star => Self::Star {
                spectral_type: record
                    .spectral_type
                    .ok_or(OrbitError::MissingSpectralType)?,
            },
            BodyKind::Terrestrial => Self::Terrestrial,
            BodyKind::GasGiant => Self::GasGiant,
            BodyKind::Special => Self::Special,
            BodyKind::Barycenter => Self::Barycenter,
        })
    }
}

/// Field-less discriminant of [`BodyCategory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum BodyKind {
    Star,
    Terrestrial,
    GasGiant,
    Special,
    Barycenter,
}

impl FromStr for BodyKind {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "star" => Ok(Self::Star),
            "terrestrial" => Ok(Self::Terrestrial),
            "gasGiant" | "gas_giant" => Ok(Self::GasGiant),
            "special" => Ok(Self::Special),
            "barycenter" => Ok(Self::Barycenter),
            other => Err(OrbitError::UnknownBodyCategory(other.to_string())),
        }
    }
}

/// A body in a star system tree.
///
/// Children orbit this body; their orbital elements must name this body as
/// parent. The root (primary star or barycenter) has no orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub id: BodyId,
    pub category: BodyCategory,
    /// Physical radius (AU)
    pub radius: Length,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_elements: Option<OrbitalElements>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CelestialBody>,
}

impl CelestialBody {
    pub fn new(id: impl Into<String>, category: BodyCategory, radius: Length) -> Self {
        Self {
            id: BodyId::new(id),
            category,
            radius,
            orbital_elements: None,
            children: Vec::new(),
        }
    }

    /// Set orbital elements (builder pattern)
    pub fn with_orbit(mut self, elements: OrbitalElements) -> Self {
        self.orbital_elements = Some(elements);
        self
    }

    /// Append an orbiting child (builder pattern)
    pub fn with_child(mut self, child: CelestialBody) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_star(&self) -> bool {
        matches!(self.category, BodyCategory::Star { .. })
    }

    /// Validates radii, orbital elements and parent links for the whole tree.
    pub fn validate(&self) -> Result<(), OrbitError> {
        self.validate_node(None)
    }

    fn validate_node(&self, parent: Option<&BodyId>) -> Result<(), OrbitError> {
        if !self.radius.is_positive_finite() {
            return Err(OrbitError::InvalidRadius {
                body: self.id.clone(),
                value: self.radius.to_au(),
            });
        }

        match (&self.orbital_elements, parent) {
            (Some(elements), Some(parent)) => {
                elements.validate()?;
                if &elements.parent_id != parent {
                    return Err(OrbitError::ParentMismatch {
                        body: self.id.clone(),
                        declared: elements.parent_id.clone(),
                        actual: parent.clone(),
                    });
                }
            }
            (None, Some(_)) => return Err(OrbitError::MissingOrbit(self.id.clone())),
            // The root may carry elements relative to something outside the
            // loaded system; they are ignored.
            (_, None) => {}
        }

        self.children
            .iter()
            .try_for_each(|child| child.validate_node(Some(&self.id)))
    }

    /// Depth-first pre-order traversal, root first.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let body = stack.pop()?;
            stack.extend(body.children.iter().rev());
            Some(body)
        })
    }

    /// Children sorted by semi-major axis, innermost first.
    ///
    /// The result defines each child's orbit slot index for equidistant
    /// layouts.
    pub fn children_by_orbit(&self) -> Vec<&CelestialBody> {
        let mut children: Vec<&CelestialBody> = self.children.iter().collect();
        children.sort_by(|a, b| {
            let sma = |body: &CelestialBody| {
                body.orbital_elements
                    .as_ref()
                    .map_or(0.0, |e| e.semi_major_axis.to_au())
            };
            sma(a)
                .partial_cmp(&sma(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        children
    }
}

/// Registry entry linking a body into the tree
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub parent: Option<BodyId>,
    /// Slot among the parent's children ordered by semi-major axis
    pub orbit_index: usize,
    /// Number of children orbiting the same parent
    pub sibling_count: usize,
    pub children: Vec<BodyId>,
}

/// Flat id lookup over a body tree.
///
/// The tree owns the bodies; the registry only records how ids relate, so the
/// rendering host can hook scene objects up by id.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    entries: HashMap<BodyId, RegistryEntry>,
    order: Vec<BodyId>,
}

impl BodyRegistry {
    pub fn from_root(root: &CelestialBody) -> Result<Self, OrbitError> {
        let mut registry = Self::default();
        registry.insert(root, None, 0, 1)?;
        Ok(registry)
    }

    fn insert(
        &mut self,
        body: &CelestialBody,
        parent: Option<&BodyId>,
        orbit_index: usize,
        sibling_count: usize,
    ) -> Result<(), OrbitError> {
        if self.entries.contains_key(&body.id) {
            return Err(OrbitError::DuplicateBodyId(body.id.clone()));
        }

        let ordered = body.children_by_orbit();
        self.entries.insert(
            body.id.clone(),
            RegistryEntry {
                parent: parent.cloned(),
                orbit_index,
                sibling_count,
                children: ordered.iter().map(|child| child.id.clone()).collect(),
            },
        );
        self.order.push(body.id.clone());

        let count = ordered.len();
        for (index, child) in ordered.into_iter().enumerate() {
            self.insert(child, Some(&body.id), index, count)?;
        }

        Ok(())
    }

    pub fn get(&self, id: &BodyId) -> Option<&RegistryEntry> {
        self.entries.get(id)
    }

    pub fn parent_of(&self, id: &BodyId) -> Option<&BodyId> {
        self.entries.get(id)?.parent.as_ref()
    }

    pub fn contains(&self, id: &BodyId) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids in depth-first order, parents before children
    pub fn ids(&self) -> impl Iterator<Item = &BodyId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
