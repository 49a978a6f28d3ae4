//! Running a complete conversion

use crate::{
    links::Links,
    output::{self, WriteError},
    parse::{AdvisoryParser, ParseError},
    source::{FetchError, Fetcher},
};
use chrono::{Local, NaiveDate};
use cvdb_common::progress::Progress;
use std::fmt::{Display, Formatter};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

pub const DEFAULT_REPOSITORY: &str = "https://github.com/wiz-sec/open-cvdb";
pub const DEFAULT_WORK_DIR: &str = "tmp/data";
pub const DEFAULT_ADVISORY_DIR: &str = "vulnerabilities";
pub const OUTPUT_SUFFIX: &str = "_vulnerabilities.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Location of the database repository.
    pub repository: String,
    /// Scratch directory, removed before and after the run.
    pub work_dir: PathBuf,
    /// Directory holding the advisories, relative to the working directory.
    pub advisory_dir: PathBuf,
    /// Directory the CSV file gets written to.
    pub output_dir: PathBuf,
    pub links: Links,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            work_dir: DEFAULT_WORK_DIR.into(),
            advisory_dir: DEFAULT_ADVISORY_DIR.into(),
            output_dir: PathBuf::from("."),
            links: Links::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    Cleaned,
    Fetched,
    Parsed,
    Written,
    /// Working directory removed again after writing.
    Finished,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => f.write_str("init"),
            Self::Cleaned => f.write_str("cleaned"),
            Self::Fetched => f.write_str("fetched"),
            Self::Parsed => f.write_str("parsed"),
            Self::Written => f.write_str("written"),
            Self::Finished => f.write_str("finished"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to remove working directory {}: {source}", path.display())]
    Cleanup { path: PathBuf, source: io::Error },
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

/// The result of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: PathBuf,
    pub records: usize,
}

/// Drives fetch, parse, and write, strictly one after the other.
///
/// Any failure ends the run in the stage it happened. The working directory is only removed
/// again after the output was written.
pub struct Lifecycle<F, P = ()>
where
    F: Fetcher,
    P: Progress,
{
    options: Options,
    fetcher: F,
    progress: P,
    date: Option<NaiveDate>,
    stage: Stage,
}

impl<F: Fetcher> Lifecycle<F> {
    pub fn new(options: Options, fetcher: F) -> Self {
        Self {
            options,
            fetcher,
            progress: (),
            date: None,
            stage: Stage::Init,
        }
    }
}

impl<F, P> Lifecycle<F, P>
where
    F: Fetcher,
    P: Progress,
{
    pub fn with_progress<NP: Progress>(self, progress: NP) -> Lifecycle<F, NP> {
        Lifecycle {
            options: self.options,
            fetcher: self.fetcher,
            progress,
            date: self.date,
            stage: self.stage,
        }
    }

    /// Use a fixed date for the output file name, instead of today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The last stage which completed.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, stage: Stage) {
        log::debug!("Stage: {} -> {stage}", self.stage);
        self.stage = stage;
    }

    pub fn run(&mut self) -> Result<Outcome, Error> {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let output = self.options.output_dir.join(output_file_name(date));
        let work_dir = self.options.work_dir.clone();

        clean_up(&work_dir)?;
        self.advance(Stage::Cleaned);

        self.fetcher.fetch(&self.options.repository, &work_dir)?;
        let advisories = work_dir.join(&self.options.advisory_dir);
        if !advisories.is_dir() {
            return Err(FetchError::MissingDirectory { path: advisories }.into());
        }
        self.advance(Stage::Fetched);

        let records = AdvisoryParser::new(self.options.links.clone())
            .parse_all(&advisories, &self.progress)?;
        self.advance(Stage::Parsed);

        output::write_file(&records, &output)?;
        self.advance(Stage::Written);

        clean_up(&work_dir)?;
        self.advance(Stage::Finished);

        log::info!("All done!");

        Ok(Outcome {
            output,
            records: records.len(),
        })
    }
}

/// The name of the output file for a run on the given date.
pub fn output_file_name(date: NaiveDate) -> String {
    format!("{}{OUTPUT_SUFFIX}", date.format("%Y%m%d"))
}

/// Remove a directory with all its content.
///
/// Returns `false` if there was nothing to remove.
pub fn clean_up(path: &Path) -> Result<bool, Error> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => {
            log::info!("Cleaning up ... removed working directory: {}", path.display());
            Ok(true)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::Cleanup {
            path: path.to_path_buf(),
            source,
        }),
    }
}
