//! Analytical solution of the startup Couette problem.
//!
//! A fluid layer of height `h` rests between two parallel walls. At `t = 0`
//! the top wall starts to move with constant velocity `u_wall`. The velocity
//! field is the linear steady state minus a transient sine series,
//!
//! ```latex
//!     u(y, t) = u_wall y / h
//!         - 2 u_wall / pi \sum_{n=1}^{N} 1/n exp(-n^2 pi^2 nu t / h^2) sin(n pi (1 - y/h))
//! ```
//!
//! truncated after `N = SERIES_TERMS` modes by default. The transient decays
//! on the viscous relaxation time `h^2 / nu`.


use crate::consts::{
    DEFAULT_KINEMATIC_VISCOSITY, DEFAULT_VERTICAL_RESOLUTION, DEFAULT_WALL_HEIGHT,
    DEFAULT_WALL_VELOCITY, PI, SERIES_TERMS,
};
use crate::errors::*;
use crate::Float;
use error_chain::bail;
use log::debug;
use ndarray::{Array, Ix1, Ix2};
use serde_derive::{Deserialize, Serialize};

/// One velocity profile per row. Row 0 is the quiescent initial condition,
/// row `k` the profile at the `k`-th time sample.
pub type ProfileSequence = Array<Float, Ix2>;

/// Physical and discretization parameters of the startup Couette problem.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CouetteParameters {
    /// Number of time samples between `t = 0` and the relaxation time.
    pub desired_timesteps: usize,
    #[serde(default = "default_wall_velocity")]
    pub wall_velocity: Float,
    #[serde(default = "default_wall_height")]
    pub wall_height: Float,
    #[serde(default = "default_kinematic_viscosity")]
    pub kinematic_viscosity: Float,
    /// Number of interior sample points between the walls.
    #[serde(default = "default_vertical_resolution")]
    pub vertical_resolution: usize,
    #[serde(default = "default_series_terms")]
    pub series_terms: usize,
}

fn default_wall_velocity() -> Float {
    DEFAULT_WALL_VELOCITY
}

fn default_wall_height() -> Float {
    DEFAULT_WALL_HEIGHT
}

fn default_kinematic_viscosity() -> Float {
    DEFAULT_KINEMATIC_VISCOSITY
}

fn default_vertical_resolution() -> usize {
    DEFAULT_VERTICAL_RESOLUTION
}

fn default_series_terms() -> usize {
    SERIES_TERMS
}

impl CouetteParameters {
    /// Returns parameters with the default physical setup and the given number
    /// of time samples.
    pub fn new(desired_timesteps: usize) -> CouetteParameters {
        CouetteParameters {
            desired_timesteps,
            wall_velocity: DEFAULT_WALL_VELOCITY,
            wall_height: DEFAULT_WALL_HEIGHT,
            kinematic_viscosity: DEFAULT_KINEMATIC_VISCOSITY,
            vertical_resolution: DEFAULT_VERTICAL_RESOLUTION,
            series_terms: SERIES_TERMS,
        }
    }

    /// Viscous relaxation time `h^2 / nu`.
    pub fn relaxation_time(&self) -> Float {
        self.wall_height * self.wall_height / self.kinematic_viscosity
    }

    pub fn timestep(&self) -> Float {
        self.relaxation_time() / self.desired_timesteps as Float
    }

    /// Number of rows of the profile sequence, including `t = 0`.
    pub fn number_of_profiles(&self) -> usize {
        self.desired_timesteps + 1
    }

    /// Number of points of one profile, including both walls.
    pub fn profile_len(&self) -> usize {
        self.vertical_resolution + 2
    }

    pub fn vertical_step(&self) -> Float {
        self.wall_height / (self.vertical_resolution + 1) as Float
    }

    /// Time samples `k dt` for `k = 1..=desired_timesteps`. The last sample
    /// coincides with the relaxation time.
    pub fn sample_times(&self) -> Array<Float, Ix1> {
        let dt = self.timestep();
        (1..=self.desired_timesteps)
            .map(|k| k as Float * dt)
            .collect()
    }

    /// Sample heights from the stationary wall (`y = 0`) to the moving wall
    /// (`y = h`), both included.
    pub fn heights(&self) -> Array<Float, Ix1> {
        let last = (self.profile_len() - 1) as Float;
        (0..self.profile_len())
            .map(|j| self.wall_height * (j as Float / last))
            .collect()
    }

    /// Velocity at height `y` and time `t`.
    pub fn velocity(&self, y: Float, t: Float) -> Float {
        startup_velocity(
            y,
            t,
            self.wall_velocity,
            self.wall_height,
            self.kinematic_viscosity,
            self.series_terms,
        )
    }

    /// Linear steady state, stored top wall first like the solved profiles.
    pub fn steady_profile(&self) -> Array<Float, Ix1> {
        self.heights()
            .iter()
            .rev()
            .map(|y| self.wall_velocity * y / self.wall_height)
            .collect()
    }

    /// Checks that the parameters describe a non-degenerate problem.
    pub fn validate(&self) -> Result<()> {
        if self.desired_timesteps == 0 {
            bail!(ErrorKind::InvalidParameter(
                "desired_timesteps",
                "must be at least 1".to_string()
            ));
        }

        if self.vertical_resolution == 0 {
            bail!(ErrorKind::InvalidParameter(
                "vertical_resolution",
                "must be at least 1".to_string()
            ));
        }

        if self.series_terms == 0 {
            bail!(ErrorKind::InvalidParameter(
                "series_terms",
                "must be at least 1".to_string()
            ));
        }

        if !(self.kinematic_viscosity > 0.) || !self.kinematic_viscosity.is_finite() {
            bail!(ErrorKind::InvalidParameter(
                "kinematic_viscosity",
                format!("must be positive and finite, got {}", self.kinematic_viscosity)
            ));
        }

        if !(self.wall_height > 0.) || !self.wall_height.is_finite() {
            bail!(ErrorKind::InvalidParameter(
                "wall_height",
                format!("must be positive and finite, got {}", self.wall_height)
            ));
        }

        if !self.wall_velocity.is_finite() {
            bail!(ErrorKind::InvalidParameter(
                "wall_velocity",
                format!("must be finite, got {}", self.wall_velocity)
            ));
        }

        Ok(())
    }

    /// Validates the parameters and returns the profile sequence.
    pub fn solve(&self) -> Result<ProfileSequence> {
        self.validate()?;
        Ok(self.solve_unchecked())
    }

    /// Evaluates the profile sequence without any sanity checks. Degenerate
    /// parameters yield non-finite values or a sequence holding only the
    /// initial condition.
    pub fn solve_unchecked(&self) -> ProfileSequence {
        debug!(
            "Solving startup Couette flow: {} time samples, {} points per profile, {} modes.",
            self.desired_timesteps,
            self.profile_len(),
            self.series_terms
        );

        let heights = self.heights();
        let times = self.sample_times();
        let mut profiles = Array::zeros((self.number_of_profiles(), self.profile_len()));

        // row 0 stays zero, the fluid is at rest
        for (mut profile, t) in profiles.outer_iter_mut().skip(1).zip(times.iter()) {
            // flipped, moving wall first; the stationary wall (last column)
            // keeps its exact zero
            let interior = profile.len() - 1;
            for (u, y) in profile
                .iter_mut()
                .take(interior)
                .zip(heights.iter().rev())
            {
                *u = self.velocity(*y, *t);
            }
        }

        profiles
    }
}

/// Truncated series solution of the startup Couette problem with `terms`
/// Fourier modes.
pub fn startup_velocity(
    y: Float,
    t: Float,
    wall_velocity: Float,
    wall_height: Float,
    nu: Float,
    terms: usize,
) -> Float {
    let eta = 1. - y / wall_height;
    let decay = -PI * PI * nu * t / (wall_height * wall_height);

    let transient: Float = (1..=terms)
        .map(|n| {
            let n = n as Float;
            (decay * n * n).exp() * (n * PI * eta).sin() / n
        })
        .sum();

    wall_velocity * (y / wall_height) - 2. * wall_velocity / PI * transient
}
