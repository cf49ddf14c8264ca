#[cfg(feature = "single")]
pub use std::f32::consts::PI;
#[cfg(not(feature = "single"))]
pub use std::f64::consts::PI;

use crate::Float;

/// Number of Fourier modes kept in the startup series. Higher modes decay
/// like `exp(-n^2)` and are dropped.
pub const SERIES_TERMS: usize = 30;

/// Number of channels of an expanded tensor. Only the first one carries the
/// velocity, the others are zero.
pub const CHANNELS: usize = 3;

pub const DEFAULT_WALL_VELOCITY: Float = 10.;
pub const DEFAULT_WALL_HEIGHT: Float = 20.;
pub const DEFAULT_KINEMATIC_VISCOSITY: Float = 2.;
pub const DEFAULT_VERTICAL_RESOLUTION: usize = 63;
pub const DEFAULT_SEED: u64 = 1;
