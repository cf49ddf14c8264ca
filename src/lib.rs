//! This crate generates synthetic flow field data for the startup Couette
//! problem. The analytical solution (a truncated Fourier series on top of the
//! linear steady state) is evaluated in the `couette` module, the resulting
//! velocity profiles are lifted into matrices, volumes and channelled tensors
//! by the `shaper` module and optionally perturbed with seeded Gaussian noise
//! from the `random` module. The `dataset` module composes these steps.

#![recursion_limit = "1024"]

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod consts;
pub mod couette;
pub mod dataset;
pub mod output;
pub mod random;
pub mod settings;
pub mod shaper;
#[cfg(test)]
mod test_helper;

/// Crate version, stamped into settings and output identifiers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "single")]
pub type Float = f32;
#[cfg(not(feature = "single"))]
pub type Float = f64;

pub mod errors {
    use error_chain::error_chain;

    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain! {
        foreign_links {
            Io(::std::io::Error);
            TomlDe(::toml::de::Error);
        }

        errors {
            InvalidParameter(name: &'static str, reason: String) {
                description("invalid parameter")
                display("invalid parameter '{}': {}", name, reason)
            }
            ShapeMismatch(expected: Vec<usize>, found: Vec<usize>) {
                description("shape mismatch")
                display("shape mismatch: expected {:?}, found {:?}", expected, found)
            }
            EmptySequence {
                description("empty sequence")
                display("cannot stack an empty sequence of arrays")
            }
            UnknownFormat(ext: String) {
                description("unknown file format")
                display("do not recognise file extension '{}'", ext)
            }
        }
    }
}
