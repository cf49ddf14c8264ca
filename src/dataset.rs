//! Composes solver, shaper and noise into the data sets handed to consumers.
//! Noise is applied once, to the fully assembled array.

use crate::couette::CouetteParameters;
use crate::errors::*;
use crate::random::{apply_default_noise, apply_noise};
use crate::settings::{Rank, Settings};
use crate::shaper::{profiles_to_planes, profiles_to_volumes};
use crate::Float;
use log::info;
use ndarray::{Array, ArrayViewD, Ix2, Ix4, Ix5, IxDyn};

/// Profile sequence `[T, N]`, noised with the default seed.
pub fn couette_1d(params: &CouetteParameters, sigma: Float) -> Result<Array<Float, Ix2>> {
    let mut profiles = params.solve()?;
    apply_default_noise(&mut profiles, sigma, params.wall_velocity)?;

    Ok(profiles)
}

/// Channelled matrices `[T, 3, N, N]`, noised with the default seed.
pub fn couette_2d(params: &CouetteParameters, sigma: Float) -> Result<Array<Float, Ix4>> {
    let profiles = params.solve()?;
    let mut planes = profiles_to_planes(profiles.view());
    apply_default_noise(&mut planes, sigma, params.wall_velocity)?;

    Ok(planes)
}

/// Channelled volumes `[T, 3, N, N, N]`, noised with the given seed.
pub fn couette_3d(
    params: &CouetteParameters,
    sigma: Float,
    seed: u64,
) -> Result<Array<Float, Ix5>> {
    let profiles = params.solve()?;
    let mut volumes = profiles_to_volumes(profiles.view());
    apply_noise(&mut volumes, sigma, params.wall_velocity, seed)?;

    Ok(volumes)
}

/// A generated data set of one of the supported ranks.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Profiles(Array<Float, Ix2>),
    Planes(Array<Float, Ix4>),
    Volumes(Array<Float, Ix5>),
}

impl Dataset {
    /// Generates the data set described by `settings`.
    pub fn generate(settings: &Settings) -> Result<Dataset> {
        let params = &settings.couette;
        let noise = settings.noise;

        info!(
            "Generating {:?} data: {} time samples, u_wall = {}, h = {}, nu = {}, {} interior points, sigma = {}.",
            settings.output.rank,
            params.desired_timesteps,
            params.wall_velocity,
            params.wall_height,
            params.kinematic_viscosity,
            params.vertical_resolution,
            noise.sigma
        );

        let d = match settings.output.rank {
            Rank::Profile => Dataset::Profiles(couette_1d(params, noise.sigma)?),
            Rank::Plane => Dataset::Planes(couette_2d(params, noise.sigma)?),
            Rank::Volume => Dataset::Volumes(couette_3d(params, noise.sigma, noise.seed)?),
        };

        Ok(d)
    }

    pub fn rank(&self) -> Rank {
        match *self {
            Dataset::Profiles(_) => Rank::Profile,
            Dataset::Planes(_) => Rank::Plane,
            Dataset::Volumes(_) => Rank::Volume,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match *self {
            Dataset::Profiles(ref a) => a.shape(),
            Dataset::Planes(ref a) => a.shape(),
            Dataset::Volumes(ref a) => a.shape(),
        }
    }

    pub fn view_dyn(&self) -> ArrayViewD<Float> {
        match *self {
            Dataset::Profiles(ref a) => a.view().into_dyn(),
            Dataset::Planes(ref a) => a.view().into_dyn(),
            Dataset::Volumes(ref a) => a.view().into_dyn(),
        }
    }

    pub fn into_dyn(self) -> Array<Float, IxDyn> {
        match self {
            Dataset::Profiles(a) => a.into_dyn(),
            Dataset::Planes(a) => a.into_dyn(),
            Dataset::Volumes(a) => a.into_dyn(),
        }
    }
}
