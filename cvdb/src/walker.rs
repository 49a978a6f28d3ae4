//! Walking an advisory directory

use std::path::PathBuf;
use walkdir::WalkDir;

/// Enumerates the candidate advisory files below a directory.
///
/// Every entry which is not a directory is a candidate, whatever its extension. Entries are
/// returned in the order the filesystem reports them, which is not sorted.
#[derive(Clone, Debug)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn candidates(&self) -> impl Iterator<Item = walkdir::Result<PathBuf>> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => None,
                Ok(entry) => Some(Ok(entry.into_path())),
                Err(err) => Some(Err(err)),
            })
    }
}
