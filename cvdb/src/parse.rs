//! Parsing advisory files into records

use crate::{links::Links, model::Vulnerability, walker::Walker};
use cvdb_common::progress::{Progress, ProgressBar};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to walk advisory directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Advisory path has no file name: {}", .0.display())]
    FileName(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Turns advisory files into [`Vulnerability`] records.
#[derive(Clone, Debug, Default)]
pub struct AdvisoryParser {
    links: Links,
}

impl AdvisoryParser {
    pub fn new(links: Links) -> Self {
        Self { links }
    }

    /// Parse a single file.
    ///
    /// The links only depend on the file name. The content must decode as an advisory document,
    /// there is no fallback for files which don't.
    pub fn parse_file(&self, path: &Path) -> Result<Vulnerability, ParseError> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .ok_or_else(|| ParseError::FileName(path.to_path_buf()))?;

        let display_url = self.links.display_url(&name);
        let source_url = self.links.source_url(&name);

        let data = fs::read(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // an empty document is an advisory without any fields
        let vulnerability = if data.iter().all(u8::is_ascii_whitespace) {
            Vulnerability::default()
        } else {
            serde_yaml::from_slice(&data).map_err(|source| ParseError::Decode {
                path: path.to_path_buf(),
                source,
            })?
        };

        Ok(vulnerability.with_links(display_url, source_url))
    }

    /// Parse all advisory files below a directory, in walk order.
    ///
    /// Fails on the first file which can't be read or decoded.
    pub fn parse_all<P: Progress>(
        &self,
        directory: &Path,
        progress: &P,
    ) -> Result<Vec<Vulnerability>, ParseError> {
        let candidates = Walker::new(directory)
            .candidates()
            .collect::<Result<Vec<_>, _>>()?;

        let mut bar = progress.start(candidates.len());
        let mut result = Vec::with_capacity(candidates.len());

        for path in candidates {
            log::debug!("Parsing: {}", path.display());
            if let Some(name) = path.file_name() {
                bar.set_message(name.to_string_lossy().into_owned());
            }

            result.push(self.parse_file(&path)?);
            bar.tick();
        }

        bar.finish();

        log::info!(
            "Parsed {} vulnerabilities from {}",
            result.len(),
            directory.display()
        );

        Ok(result)
    }
}
