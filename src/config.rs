//! Configuration management and validation.
//!
//! The only configurable values are the input file and the two output
//! destinations. Everything is checked before the pipeline opens a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::args::Args;
use crate::constants::DEFAULT_ERROR_FILE_NAME;
use crate::{Error, Result};

/// Paths and behaviour for one processing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file of flight records to read
    pub input_path: PathBuf,

    /// Destination for valid, classified records
    pub output_path: PathBuf,

    /// Destination for rejected records
    pub error_path: PathBuf,

    /// Overwrite existing outputs without asking
    pub assume_yes: bool,
}

impl Config {
    /// Create a configuration with the error file derived from the output path
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        let output_path = output_path.into();
        let error_path = Self::default_error_path(&output_path);
        Self {
            input_path: input_path.into(),
            output_path,
            error_path,
            assume_yes: false,
        }
    }

    /// Build the configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut config = Self::new(&args.input_path, &args.output_path);
        if let Some(error_path) = &args.error_path {
            config.error_path = error_path.clone();
        }
        config.assume_yes = args.assume_yes;
        config
    }

    /// Error file beside the output file
    pub fn default_error_path(output_path: &Path) -> PathBuf {
        output_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(DEFAULT_ERROR_FILE_NAME)
    }

    /// Check that the input is readable and the outputs are usable
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::file_not_found(self.input_path.display().to_string()));
        }
        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path {} is not a file",
                self.input_path.display()
            )));
        }

        for (label, path) in self.outputs() {
            if same_file(path, &self.input_path) {
                return Err(Error::configuration(format!(
                    "{} path {} is the same as the input file",
                    label,
                    path.display()
                )));
            }
            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "{} path {} is a directory",
                    label,
                    path.display()
                )));
            }
            let parent = parent_dir(path);
            if !parent.is_dir() {
                return Err(Error::configuration(format!(
                    "{} directory {} does not exist",
                    label,
                    parent.display()
                )));
            }
            check_writable(label, path, parent)?;
        }

        if same_file(&self.output_path, &self.error_path) {
            return Err(Error::configuration(format!(
                "Output and error paths both point to {}",
                self.output_path.display()
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Output paths that already exist and would be overwritten
    pub fn existing_outputs(&self) -> Vec<&Path> {
        self.outputs()
            .into_iter()
            .map(|(_, path)| path)
            .filter(|path| path.exists())
            .collect()
    }

    fn outputs(&self) -> [(&'static str, &Path); 2] {
        [
            ("Output", self.output_path.as_path()),
            ("Error", self.error_path.as_path()),
        ]
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Fail early when an output cannot be written
///
/// Existing files are opened for append so nothing is truncated; new
/// files need a writable parent directory.
fn check_writable(label: &str, path: &Path, parent: &Path) -> Result<()> {
    let target = if path.exists() { path } else { parent };
    let metadata = fs::metadata(target)
        .map_err(|e| Error::configuration(format!("Cannot read {}: {}", target.display(), e)))?;
    if metadata.permissions().readonly() {
        return Err(Error::configuration(format!(
            "{} path {} is not writable",
            label,
            path.display()
        )));
    }

    if path.exists() {
        OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| Error::configuration(format!("Cannot write {}: {}", path.display(), e)))?;
    }
    Ok(())
}

/// Compare resolved paths when both exist, literal paths otherwise
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
