//! Two-body Keplerian orbits for star system rendering.
//!
//! Bodies form a tree rooted at the primary star (or a barycenter); each child
//! carries orbital elements relative to its parent. Positions are computed on
//! demand from elements and simulation time, with no integration state.

pub mod body;
pub mod elements;
pub mod error;
pub mod kepler;

#[cfg(test)]
mod elements_test;

pub use body::{BodyCategory, BodyId, BodyKind, BodyRegistry, CelestialBody, RegistryEntry};
pub use elements::OrbitalElements;
pub use error::OrbitError;
pub use kepler::{KeplerSolution, orbit_path, position_at, solve_kepler, true_anomaly};
