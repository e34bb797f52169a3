//! Physical quantity newtypes shared by the orbital and zone calculations.

pub mod angle;
pub mod length;
pub mod time;


pub use angle::Angle;
pub use length::Length;
pub use time::{SECONDS_PER_YEAR, Time};
