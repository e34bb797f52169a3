//! Per-mode remapping of solver output into render space.

use nalgebra::{Point3, Vector3};

use crate::modes::DisplayMode;

/// Equidistant orbit spacing as a fraction of the orbital scale
pub const BASE_SPACING_RATIO: f64 = 0.5;

/// Position of a body among the bodies orbiting the same parent.
///
/// Slots are ordered by semi-major axis, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitSlot {
    pub index: usize,
    /// Number of bodies sharing the parent
    pub count: usize,
}

impl OrbitSlot {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }
}

pub fn base_spacing(orbital_scale: f64) -> f64 {
    orbital_scale * BASE_SPACING_RATIO
}

/// Factor that stretches the equidistant layout so its outermost slot lands on
/// the outermost realistic radius. `None` when there is nothing to match.
fn footprint_factor(count: usize, spacing: f64, system_max_realistic_radius: f64) -> Option<f64> {
    let max_equidistant = spacing * count as f64;
    let usable = count > 0
        && max_equidistant.is_finite()
        && max_equidistant > 0.0
        && system_max_realistic_radius.is_finite()
        && system_max_realistic_radius > 0.0;

    usable.then(|| system_max_realistic_radius / max_equidistant)
}

/// Radius of an orbit slot in the equidistant layouts.
///
/// Slot `i` sits at `spacing·(i+1)`, rescaled by the footprint factor. Without
/// siblings or a usable realistic radius the unscaled value is returned, which
/// is finite and positive for any positive orbital scale.
pub fn equidistant_radius(
    slot: OrbitSlot,
    orbital_scale: f64,
    system_max_realistic_radius: f64,
) -> f64 {
    let spacing = base_spacing(orbital_scale);
    let radius = spacing * (slot.index + 1) as f64;

    match footprint_factor(slot.count, spacing, system_max_realistic_radius) {
        Some(factor) => radius * factor,
        None => radius,
    }
}

/// Maps a parent-centered solver position into render space.
///
/// * `Realistic` scales the raw position by `orbital_scale`.
/// * `Navigational` keeps the direction of `raw` but replaces its distance
///   with the slot's equidistant radius.
/// * `Profile` lays slots out along +x, offset by one orbital scale so the
///   parent keeps a lane of its own.
///
/// # Examples
/// ```
/// use nalgebra::Point3;
/// use view_scaling::{transform, DisplayMode, OrbitSlot};
///
/// let raw = Point3::new(0.0, 0.0, 30.0);
/// let outermost = OrbitSlot::new(3, 4);
///
/// // Navigational layouts keep the realistic footprint
/// let p = transform(&raw, outermost, DisplayMode::Navigational, 2.0, 60.0);
/// assert!((p.z - 60.0).abs() < 1e-9);
/// ```
pub fn transform(
    raw: &Point3<f64>,
    slot: OrbitSlot,
    display_mode: DisplayMode,
    orbital_scale: f64,
    system_max_realistic_radius: f64,
) -> Point3<f64> {
    match display_mode {
        DisplayMode::Realistic => Point3::from(raw.coords * orbital_scale),
        DisplayMode::Navigational => {
            let radius = equidistant_radius(slot, orbital_scale, system_max_realistic_radius);
            Point3::from(radial_direction(raw) * radius)
        }
        DisplayMode::Profile => {
            let radius = equidistant_radius(slot, orbital_scale, system_max_realistic_radius);
            Point3::new(radius + orbital_scale, 0.0, 0.0)
        }
    }
}

// A body sitting exactly on its parent gets the profile lane direction
fn radial_direction(raw: &Point3<f64>) -> Vector3<f64> {
    raw.coords
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::x)
}

/// Largest realistic render radius among sibling orbit extents, 0 when empty.
///
/// `extents` are the farthest distances (AU) each sibling reaches from the
/// parent. Feeding orbit extents rather than current positions keeps the
/// equidistant rings fixed while eccentric bodies move along their orbits.
pub fn system_max_realistic_radius<I>(extents: I, orbital_scale: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    extents
        .into_iter()
        .map(|extent| extent * orbital_scale)
        .fold(0.0, f64::max)
}

/// Camera target for a focused body in profile mode.
///
/// Profile placement ignores the solver position, so framing uses the same
/// lane coordinate that [`transform`] places the body at.
pub fn profile_focus_point(
    slot: OrbitSlot,
    orbital_scale: f64,
    system_max_realistic_radius: f64,
) -> Point3<f64> {
    transform(
        &Point3::origin(),
        slot,
        DisplayMode::Profile,
        orbital_scale,
        system_max_realistic_radius,
    )
}
