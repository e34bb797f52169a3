//! Star system frame composition
//!
//! Ties the numerical crates together for a rendering host: a [`StarSystem`]
//! is loaded once from a catalog tree, then every frame the host asks for
//! render-space positions, zone overlays and camera parameters under the
//! current [`view_state::ModeState`].

pub mod config;
pub mod error;
pub mod frame;
pub mod system;

pub use config::ViewConfig;
pub use error::SystemError;
pub use frame::{FocusView, Frame, FrameBody, OrbitLine};
pub use system::StarSystem;

// Re-export the catalog types hosts build systems from
pub use orbits::{BodyCategory, BodyId, BodyKind, CelestialBody, OrbitalElements};
pub use stellar::{ZoneKind, ZoneResult};

#[cfg(test)]
mod config_test;
