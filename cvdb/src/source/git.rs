use super::{FetchError, Fetcher};
use git2::Repository;
use std::fs;
use std::path::Path;

/// Clones the default branch of a git repository.
///
/// The location can be anything libgit2 understands, including the path of a local repository.
#[derive(Clone, Copy, Debug, Default)]
pub struct GitFetcher;

impl Fetcher for GitFetcher {
    fn fetch(&self, location: &str, destination: &Path) -> Result<(), FetchError> {
        if let Some(parent) = destination
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|source| FetchError::Destination {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        log::debug!("Cloning {location} into {}", destination.display());

        let repository =
            Repository::clone(location, destination).map_err(|source| FetchError::Clone {
                location: location.to_string(),
                source,
            })?;

        if let Some(head) = repository.head().ok().and_then(|head| head.target()) {
            log::debug!("Checked out commit {head}");
        }

        log::info!(
            "Cloned repository {location} into {}",
            destination.display()
        );

        Ok(())
    }
}
