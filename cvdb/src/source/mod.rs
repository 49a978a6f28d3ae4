//! Acquiring the advisory data

mod git;

pub use git::*;

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to prepare destination {}: {source}", path.display())]
    Destination {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to clone {location}: {source}")]
    Clone {
        location: String,
        source: git2::Error,
    },
    #[error("Fetched data has no advisory directory: {}", path.display())]
    MissingDirectory { path: PathBuf },
}

/// Populates a local directory with the content of a source location.
///
/// There is a single attempt, failures are reported as they are.
pub trait Fetcher {
    fn fetch(&self, location: &str, destination: &Path) -> Result<(), FetchError>;
}

impl<F> Fetcher for F
where
    F: Fn(&str, &Path) -> Result<(), FetchError>,
{
    fn fetch(&self, location: &str, destination: &Path) -> Result<(), FetchError> {
        self(location, destination)
    }
}
