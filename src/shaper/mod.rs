//! Lifts one-dimensional velocity profiles into the fixed-shape arrays
//! expected by image-like consumers. All expansions are plain broadcasts, the
//! input can be recovered from every row, column or layer of the output.

// Move unit test into own file
#[cfg(test)]
#[path = "./shaper_test.rs"]
mod shaper_test;

use crate::consts::CHANNELS;
use crate::errors::*;
use crate::Float;
use ndarray::{Array, ArrayView, Axis, Dimension, Ix1, Ix2, Ix3, Ix4, Ix5, RemoveAxis};

/// Replicates a profile of length `N` into an `N x N` matrix. Every column
/// holds the profile, i.e. the field is constant along the horizontal axis.
pub fn expand_vector_to_matrix(profile: ArrayView<Float, Ix1>) -> Array<Float, Ix2> {
    let n = profile.len();
    let mut m = Array::zeros((n, n));

    for mut column in m.axis_iter_mut(Axis(1)) {
        column.assign(&profile);
    }

    m
}

/// Replicates an `H x W` matrix into an `H x H x W` volume, constant along the
/// new leading depth axis.
pub fn expand_matrix_to_volume(matrix: ArrayView<Float, Ix2>) -> Array<Float, Ix3> {
    let (h, w) = matrix.dim();
    let mut v = Array::zeros((h, h, w));

    for mut layer in v.outer_iter_mut() {
        layer.assign(&matrix);
    }

    v
}

/// Prepends a channel axis of size `CHANNELS`. The first channel holds the
/// values of `a`, the remaining ones are zero.
pub fn expand_to_channels<D>(a: ArrayView<Float, D>) -> Array<Float, D::Larger>
where
    D: Dimension,
    D::Larger: RemoveAxis,
{
    let mut dim = a.raw_dim().insert_axis(Axis(0));
    dim[0] = CHANNELS;

    let mut out = Array::zeros(dim);
    out.index_axis_mut(Axis(0), 0).assign(&a);

    out
}

/// Stacks equally shaped arrays along a new leading time axis.
pub fn stack_timesteps<D>(items: &[Array<Float, D>]) -> Result<Array<Float, D::Larger>>
where
    D: Dimension,
    D::Larger: RemoveAxis,
{
    let first = match items.first() {
        Some(f) => f,
        None => return Err(ErrorKind::EmptySequence.into()),
    };

    if let Some(odd) = items.iter().find(|a| a.shape() != first.shape()) {
        return Err(ErrorKind::ShapeMismatch(first.shape().to_vec(), odd.shape().to_vec()).into());
    }

    let views: Vec<ArrayView<Float, D>> = items.iter().map(|a| a.view()).collect();

    ndarray::stack(Axis(0), &views).chain_err(|| "Unable to stack timesteps.")
}

/// Expands every row of `profiles` to a channelled matrix, `[T, 3, N, N]`.
/// The output is allocated once and filled per time step.
pub fn profiles_to_planes(profiles: ArrayView<Float, Ix2>) -> Array<Float, Ix4> {
    let (t, n) = profiles.dim();
    let mut planes = Array::zeros((t, CHANNELS, n, n));

    for (mut plane, p) in planes.outer_iter_mut().zip(profiles.outer_iter()) {
        // column vector, broadcast along the horizontal axis
        plane
            .index_axis_mut(Axis(0), 0)
            .assign(&p.insert_axis(Axis(1)));
    }

    planes
}

/// Expands every row of `profiles` to a channelled volume, `[T, 3, N, N, N]`.
/// The output is allocated once and filled per time step.
pub fn profiles_to_volumes(profiles: ArrayView<Float, Ix2>) -> Array<Float, Ix5> {
    let (t, n) = profiles.dim();
    let mut volumes = Array::zeros((t, CHANNELS, n, n, n));

    for (mut volume, p) in volumes.outer_iter_mut().zip(profiles.outer_iter()) {
        // broadcast along depth and horizontal axis
        volume
            .index_axis_mut(Axis(0), 0)
            .assign(&p.insert_axis(Axis(1)));
    }

    volumes
}
