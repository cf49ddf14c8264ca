//! Seeded Gaussian noise emulating measurement noise on top of the analytical
//! data. Every caller owns its generator, so equal seeds reproduce equal
//! perturbations independently of any other call.

use crate::consts::DEFAULT_SEED;
use crate::errors::*;
use crate::Float;
use log::debug;
use ndarray::{ArrayBase, DataMut, Dimension};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64Mcg;

/// Normal distributed samples with zero mean, drawn from an explicitly seeded
/// generator.
pub struct GaussianNoise {
    rng: Pcg64Mcg,
    dist: Normal<Float>,
}

impl GaussianNoise {
    /// Returns a noise source with standard deviation `std_dev`.
    pub fn new(std_dev: Float, seed: u64) -> Result<GaussianNoise> {
        let dist = Normal::new(0., std_dev).map_err(|e| {
            Error::from_kind(ErrorKind::InvalidParameter(
                "noise_sigma",
                format!("{} (standard deviation {})", e, std_dev),
            ))
        })?;

        Ok(GaussianNoise {
            rng: Pcg64Mcg::seed_from_u64(seed),
            dist,
        })
    }

    pub fn sample(&mut self) -> Float {
        self.dist.sample(&mut self.rng)
    }

    /// Adds one sample to every element of `array`, in logical order.
    pub fn perturb<S, D>(&mut self, array: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = Float>,
        D: Dimension,
    {
        for v in array.iter_mut() {
            *v += self.sample();
        }
    }
}

impl Iterator for GaussianNoise {
    type Item = Float;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sample())
    }
}

/// Adds Gaussian noise with standard deviation `wall_velocity * sigma` to
/// `array`. A `sigma` of zero leaves the data untouched.
pub fn apply_noise<S, D>(
    array: &mut ArrayBase<S, D>,
    sigma: Float,
    wall_velocity: Float,
    seed: u64,
) -> Result<()>
where
    S: DataMut<Elem = Float>,
    D: Dimension,
{
    if sigma == 0. {
        return Ok(());
    }

    let std_dev = (wall_velocity * sigma).abs();
    debug!(
        "Applying noise with standard deviation {} (seed {}) to {} values.",
        std_dev,
        seed,
        array.len()
    );

    let mut noise = GaussianNoise::new(std_dev, seed)?;
    noise.perturb(array);

    Ok(())
}

/// Same as `apply_noise` using the default seed.
pub fn apply_default_noise<S, D>(
    array: &mut ArrayBase<S, D>,
    sigma: Float,
    wall_velocity: Float,
) -> Result<()>
where
    S: DataMut<Elem = Float>,
    D: Dimension,
{
    apply_noise(array, sigma, wall_velocity, DEFAULT_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array;

    #[test]
    fn same_seed_is_reproducible() {
        let mut a = Array::<Float, _>::zeros((4, 3, 5));
        let mut b = a.clone();

        apply_noise(&mut a, 0.3, 10., 7).unwrap();
        apply_noise(&mut b, 0.3, 10., 7).unwrap();

        assert!(a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits()));
        assert!(a.iter().any(|&x| x != 0.));
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Array::<Float, _>::zeros(64);
        let mut b = a.clone();

        apply_noise(&mut a, 0.3, 10., 1).unwrap();
        apply_noise(&mut b, 0.3, 10., 2).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn zero_sigma_is_identity() {
        let mut a = Array::<Float, _>::linspace(0., 1., 11);
        let b = a.clone();

        apply_noise(&mut a, 0., 10., 3).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn calls_are_independent() {
        // an unrelated noisy call in between must not change the outcome
        let mut a = Array::<Float, _>::zeros(16);
        let mut b = a.clone();
        let mut other = a.clone();

        apply_default_noise(&mut a, 0.1, 10.).unwrap();
        apply_noise(&mut other, 0.5, 10., 99).unwrap();
        apply_default_noise(&mut b, 0.1, 10.).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn standard_deviation_scales_with_wall_velocity() {
        let n = 20_000;
        let samples: Vec<Float> = GaussianNoise::new(10. * 0.3, 1).unwrap().take(n).collect();

        let mean = samples.iter().sum::<Float>() / n as Float;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<Float>() / n as Float;

        assert!(mean.abs() < 0.1, "mean {}", mean);
        assert!((var.sqrt() - 3.).abs() < 0.1, "std dev {}", var.sqrt());
    }

    #[test]
    fn rejects_non_finite_deviation() {
        assert!(GaussianNoise::new(Float::NAN, 1).is_err());
    }
}
