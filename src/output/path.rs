use crate::errors::*;
use chrono::Local;
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

/// ´OutputPath´ represents a common path, which all files written to disk share.
///
/// The `.with_extension()` method allows for easy change of file extension, to
/// differentiate between the outputs.
#[derive(Clone, Debug)]
pub struct OutputPath {
    path: PathBuf,
}

impl OutputPath {
    pub fn new(root: &Path, prefix: &str) -> OutputPath {
        let id = create_output_id(prefix);

        OutputPath {
            path: root.join(&id).join(&id),
        }
    }

    pub fn create(&self) -> Result<()> {
        // create directory containing all produced files
        create_output_dir(self.path.parent().ok_or("Cannot create output directory")?)
    }

    /// Returns path with given file extension.
    pub fn with_extension(&self, ext: &str) -> PathBuf {
        self.path.with_extension(ext)
    }
}

/// Returns an ID based on prefix, time, and version for the generated data
fn create_output_id(prefix: &str) -> String {
    // dots would be taken for an extension by `.with_extension()`
    let v = crate::VERSION.replace(".", "_");
    format!(
        "{prefix}-{time}_v{version}",
        prefix = prefix,
        time = Local::now().format("%Y-%m-%d_%H%M%S"),
        version = v
    )
}

/// Creates own output directory in output path using id.
fn create_output_dir(path: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(&path)
        .chain_err(|| format!("Unable to create output directory '{}'", &path.display()))
}
