//! This module handles a TOML settings file.

use crate::consts::DEFAULT_SEED;
use crate::couette::CouetteParameters;
use crate::errors::*;
use crate::Float;
use error_chain::bail;
use log::warn;
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::MsgPack;
const DEFAULT_RANK: Rank = Rank::Volume;

/// Structure that holds settings, which are defined externally in a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub couette: CouetteParameters,
    #[serde(default)]
    pub noise: NoiseSettings,
    #[serde(default)]
    pub output: OutputSettings,
    pub environment: EnvironmentSettings,
}

/// Holds the measurement noise model
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseSettings {
    /// Standard deviation as a fraction of the wall velocity
    #[serde(default)]
    pub sigma: Float,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for NoiseSettings {
    fn default() -> NoiseSettings {
        NoiseSettings {
            sigma: 0.,
            seed: DEFAULT_SEED,
        }
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Shape of the generated data set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Rank {
    /// `[T, N]`
    Profile,
    /// `[T, 3, N, N]`
    Plane,
    /// `[T, 3, N, N, N]`
    Volume,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    CBOR,
    Bincode,
    MsgPack,
    CSV,
}

/// Holds output configuration
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    #[serde(default = "default_rank")]
    pub rank: Rank,
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> OutputSettings {
        OutputSettings {
            rank: DEFAULT_RANK,
            format: DEFAULT_OUTPUT_FORMAT,
        }
    }
}

fn default_rank() -> Rank {
    DEFAULT_RANK
}

/// Default output format
fn default_output_format() -> OutputFormat {
    DEFAULT_OUTPUT_FORMAT
}

/// Holds environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSettings {
    pub prefix: String,
    #[serde(default)]
    version: String,
}

/// Reads the content of a file `filename` into an string and return it.
fn read_from_file(filename: &Path) -> Result<String> {
    let mut f = File::open(filename).chain_err(|| "Unable to open file.")?;
    let mut content = String::new();

    f.read_to_string(&mut content)
        .chain_err(|| "Unable to read file.")?;

    Ok(content)
}

/// Reads content of a file `param_file`, that should point to a valid TOML
/// file, and Parsers it.
/// Then returns the deserialized data in form of a Settings struct.
pub fn read_parameter_file<P: AsRef<Path>>(param_file: P) -> Result<Settings> {
    // read .toml file into string
    let toml_string =
        read_from_file(param_file.as_ref()).chain_err(|| "Unable to read parameter file.")?;

    let mut settings: Settings =
        toml::from_str(&toml_string).chain_err(|| "Unable to parse parameter file.")?;

    settings.environment.version = "".to_string();

    check_settings(&settings)?;

    Ok(settings)
}

fn check_settings(s: &Settings) -> Result<()> {
    s.couette
        .validate()
        .chain_err(|| "Couette parameters are invalid.")?;

    if !(s.noise.sigma >= 0.) || !s.noise.sigma.is_finite() {
        bail!(ErrorKind::InvalidParameter(
            "sigma",
            format!("must be non-negative and finite, got {}", s.noise.sigma)
        ))
    }

    if s.environment.prefix.is_empty() {
        bail!("Output prefix must not be empty.")
    }

    if s.noise.seed != DEFAULT_SEED && s.output.rank != Rank::Volume {
        warn!(
            "Noise seed {} is ignored for rank {:?}, the default seed {} is used.",
            s.noise.seed, s.output.rank, DEFAULT_SEED
        );
    }

    Ok(())
}

impl Settings {
    pub fn set_version(&mut self, version: &str) {
        // save version to metadata
        self.environment.version = version.to_string();
    }

    pub fn version(&self) -> &str {
        &self.environment.version
    }

    /// Saves `Settings` to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let filename = filename.as_ref();
        let mut f = File::create(filename)
            .chain_err(|| format!("Unable to create file '{}'.", filename.display()))?;

        let s = toml::to_string_pretty(&self)
            .chain_err(|| "Failed to transform settings into TOML format.")?;

        f.write_all(s.as_bytes())
            .chain_err(|| "Failed to write settings to file.")?;

        Ok(())
    }
}
