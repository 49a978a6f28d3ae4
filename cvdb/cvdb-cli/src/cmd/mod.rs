use cvdb_walker::{
    lifecycle::{DEFAULT_ADVISORY_DIR, DEFAULT_REPOSITORY, DEFAULT_WORK_DIR},
    links::{DEFAULT_DISPLAY_BASE, DEFAULT_SOURCE_BASE, Links},
};
use std::path::PathBuf;
use url::Url;

pub mod convert;
pub mod parse;

#[derive(Debug, clap::Parser)]
#[command(next_help_heading = "Source")]
pub struct SourceArguments {
    /// Git repository of the database.
    #[arg(long, env = "CVDB_REPOSITORY", default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Scratch directory for the repository. Removed before and after the run.
    #[arg(long, default_value = DEFAULT_WORK_DIR)]
    pub work_dir: PathBuf,

    /// Directory of the advisories, relative to the repository root.
    #[arg(long, default_value = DEFAULT_ADVISORY_DIR)]
    pub advisories: PathBuf,
}

#[derive(Debug, clap::Parser)]
#[command(next_help_heading = "Links")]
pub struct LinkArguments {
    /// Base URL of the advisory pages.
    #[arg(long, default_value = DEFAULT_DISPLAY_BASE)]
    pub display_base: Url,

    /// Base URL of the raw advisory documents.
    #[arg(long, default_value = DEFAULT_SOURCE_BASE)]
    pub source_base: Url,
}

impl From<LinkArguments> for Links {
    fn from(value: LinkArguments) -> Self {
        Links::new(value.display_base, value.source_base)
    }
}
