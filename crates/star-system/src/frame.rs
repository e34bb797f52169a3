//! Per-frame render output.
//!
//! Positions are composed top-down: each body's render position is its
//! parent's render position plus the view-transformed offset of its own orbit.
//! Nothing is cached between frames since every value depends on the active
//! modes.

use nalgebra::{Point3, Vector3};
use orbits::{
    BodyId, BodyKind, BodyRegistry, CelestialBody, OrbitalElements, orbit_path, position_at,
};
use serde::Serialize;
use stellar::ZoneResult;
use view_scaling::{
    DisplayMode, OrbitSlot, RenderParameters, ViewMode, ViewModeScaling, profile_focus_point,
    system_max_realistic_radius, transform,
};
use view_state::ModeState;

use crate::config::ViewConfig;
use crate::error::SystemError;
use crate::system::StarSystem;

/// One body as the renderer should draw it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameBody {
    pub id: BodyId,
    pub kind: BodyKind,
    pub parent: Option<BodyId>,
    pub position: Point3<f64>,
    /// Radius after the view mode's body scale
    pub render_radius: f64,
    /// Glow shader radius, stars only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub time_seconds: f64,
    pub mode: DisplayMode,
    pub view_mode: ViewMode,
    /// Depth-first, parents before children, siblings innermost first
    pub bodies: Vec<FrameBody>,
    /// Zone overlays in realistic mode, empty while scientific info is
    /// switched off
    pub zones: Vec<ZoneResult>,
}

impl Frame {
    pub fn body(&self, id: &BodyId) -> Option<&FrameBody> {
        self.bodies.iter().find(|body| &body.id == id)
    }
}

/// Camera target and parameters for a focused body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusView {
    pub id: BodyId,
    pub target: Point3<f64>,
    pub render_radius: f64,
    pub params: RenderParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitLine {
    pub body_id: BodyId,
    pub points: Vec<Point3<f64>>,
}

/// A child placed in its orbit slot around the parent
struct Placement<'a> {
    body: &'a CelestialBody,
    elements: &'a OrbitalElements,
    slot: OrbitSlot,
    /// Largest realistic orbit extent among the siblings
    max_radius: f64,
    offset: Vector3<f64>,
}

struct Layout<'a> {
    scaling: &'a ViewModeScaling,
    registry: &'a BodyRegistry,
    mode: DisplayMode,
    time_seconds: f64,
}

impl<'a> Layout<'a> {
    fn new(
        system: &'a StarSystem,
        state: &ModeState,
        config: &'a ViewConfig,
        time_seconds: f64,
    ) -> Self {
        Self {
            scaling: config.scaling.get(state.view_mode),
            registry: system.registry(),
            mode: state.mode,
            time_seconds,
        }
    }

    /// Places the children of `parent` in the slots the registry assigned.
    ///
    /// The footprint comes from each sibling's apoapsis, so ring radii depend
    /// only on the orbits and not on where the bodies are at this time.
    fn place_children<'b>(&self, parent: &'b CelestialBody) -> Vec<Placement<'b>> {
        let orbiting: Vec<(&CelestialBody, &OrbitalElements, OrbitSlot)> = parent
            .children_by_orbit()
            .into_iter()
            .filter_map(|child| {
                let elements = child.orbital_elements.as_ref()?;
                let entry = self.registry.get(&child.id)?;
                let slot = OrbitSlot::new(entry.orbit_index, entry.sibling_count);
                Some((child, elements, slot))
            })
            .collect();

        let orbital_scale = self.scaling.orbital_scale;
        let max_radius = system_max_realistic_radius(
            orbiting
                .iter()
                .map(|(_, elements, _)| elements.apoapsis().to_au()),
            orbital_scale,
        );

        orbiting
            .into_iter()
            .map(|(body, elements, slot)| {
                let raw = position_at(elements, self.time_seconds);
                Placement {
                    body,
                    elements,
                    slot,
                    max_radius,
                    offset: transform(&raw, slot, self.mode, orbital_scale, max_radius).coords,
                }
            })
            .collect()
    }

    /// Visits every non-root body with its placement, parent and render
    /// positions, parents first.
    fn walk<'b>(
        &self,
        parent: &'b CelestialBody,
        parent_position: Point3<f64>,
        visit: &mut dyn FnMut(&Placement<'b>, &'b CelestialBody, Point3<f64>, Point3<f64>),
    ) {
        for placement in self.place_children(parent) {
            let position = parent_position + placement.offset;
            visit(&placement, parent, parent_position, position);
            self.walk(placement.body, position, visit);
        }
    }

    fn render_radius(&self, body: &CelestialBody, parent: Option<&CelestialBody>) -> f64 {
        let scale = match body.category.kind() {
            BodyKind::Star => self.scaling.star_scale,
            BodyKind::Barycenter => 0.0,
            _ if parent.is_some_and(orbits_a_planet) => self.scaling.moon_scale,
            _ => self.scaling.planet_scale,
        };
        body.radius.to_au() * scale
    }

    fn frame_body(
        &self,
        body: &CelestialBody,
        parent: Option<&CelestialBody>,
        position: Point3<f64>,
    ) -> FrameBody {
        FrameBody {
            id: body.id.clone(),
            kind: body.category.kind(),
            parent: parent.map(|p| p.id.clone()),
            position,
            render_radius: self.render_radius(body, parent),
            glow_radius: body
                .is_star()
                .then(|| body.radius.to_au() * self.scaling.star_shader_scale),
        }
    }
}

fn orbits_a_planet(parent: &CelestialBody) -> bool {
    !matches!(
        parent.category.kind(),
        BodyKind::Star | BodyKind::Barycenter
    )
}

impl StarSystem {
    /// Render-space positions, radii and zone overlays at `time_seconds`.
    ///
    /// Zone radii are realistic distances, so they are only emitted in
    /// realistic mode where body positions share that scale.
    pub fn frame(
        &self,
        state: &ModeState,
        config: &ViewConfig,
        time_seconds: f64,
    ) -> Result<Frame, SystemError> {
        let layout = Layout::new(self, state, config, time_seconds);
        let root = self.root();

        let mut bodies = Vec::with_capacity(self.registry().len());
        bodies.push(layout.frame_body(root, None, Point3::origin()));
        layout.walk(root, Point3::origin(), &mut |placement, parent, _, position| {
            bodies.push(layout.frame_body(placement.body, Some(parent), position));
        });

        let zones = if state.features.scientific_info && state.mode == DisplayMode::Realistic {
            self.zones(layout.scaling.orbital_scale)?
        } else {
            Vec::new()
        };

        Ok(Frame {
            time_seconds,
            mode: state.mode,
            view_mode: state.view_mode,
            bodies,
            zones,
        })
    }

    /// Camera target and render parameters for focusing on `id`.
    ///
    /// In profile mode the target is the body's lane coordinate, the same
    /// point the frame places it at.
    pub fn focus(
        &self,
        id: &BodyId,
        state: &ModeState,
        config: &ViewConfig,
        time_seconds: f64,
        camera_distance: f64,
    ) -> Result<FocusView, SystemError> {
        if !self.registry().contains(id) {
            return Err(SystemError::UnknownBody(id.clone()));
        }

        let mut path = vec![id];
        while let Some(parent) = path.last().and_then(|last| self.registry().parent_of(last)) {
            path.push(parent);
        }
        path.reverse();

        let layout = Layout::new(self, state, config, time_seconds);
        let orbital_scale = layout.scaling.orbital_scale;

        let mut body = self.root();
        let mut parent = None;
        let mut target = Point3::origin();

        for next in path.into_iter().skip(1) {
            let placement = layout
                .place_children(body)
                .into_iter()
                .find(|placement| &placement.body.id == next)
                .ok_or_else(|| SystemError::UnknownBody(next.clone()))?;

            target += match state.mode {
                DisplayMode::Profile => {
                    profile_focus_point(placement.slot, orbital_scale, placement.max_radius).coords
                }
                _ => placement.offset,
            };
            parent = Some(body);
            body = placement.body;
        }

        let render_radius = layout.render_radius(body, parent);
        let params = config.thresholds.derive(render_radius, camera_distance);
        log::trace!("focus {id} at {target:?} with {params:?}");

        Ok(FocusView {
            id: id.clone(),
            target,
            render_radius,
            params,
        })
    }

    /// Orbit lines in render space, one per orbiting body.
    ///
    /// Profile mode lays bodies out on a lane and draws no orbits.
    pub fn orbit_lines(
        &self,
        state: &ModeState,
        config: &ViewConfig,
        time_seconds: f64,
    ) -> Vec<OrbitLine> {
        if state.mode == DisplayMode::Profile {
            return Vec::new();
        }

        let layout = Layout::new(self, state, config, time_seconds);
        let orbital_scale = layout.scaling.orbital_scale;
        let mut lines = Vec::new();

        layout.walk(
            self.root(),
            Point3::origin(),
            &mut |placement, _, parent_position, _| {
                let points = orbit_path(placement.elements, config.orbit_segments)
                    .iter()
                    .map(|raw| {
                        parent_position
                            + transform(
                                raw,
                                placement.slot,
                                layout.mode,
                                orbital_scale,
                                placement.max_radius,
                            )
                            .coords
                    })
                    .collect();

                lines.push(OrbitLine {
                    body_id: placement.body.id.clone(),
                    points,
                });
            },
        );

        lines
    }
}
