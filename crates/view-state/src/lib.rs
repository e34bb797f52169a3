//! Mode state for the star system view.
//!
//! [`ModeState`] is an immutable snapshot updated by a pure reducer;
//! [`ModeStore`] shares snapshots between many readers and serializes writes.

pub mod error;
pub mod features;
pub mod state;
pub mod store;

#[cfg(test)]
mod features_test;

pub use error::StateError;
pub use features::{Feature, FeatureFlags};
pub use state::{DataSource, ModeAction, ModeState, optimize_rendering};
pub use store::ModeStore;
