use crate::cmd::{LinkArguments, SourceArguments};
use anyhow::Context;
use cvdb_common::{cli::CommandDefaults, progress::Progress};
use cvdb_walker::{
    lifecycle::{Lifecycle, Options},
    source::GitFetcher,
};
use std::path::PathBuf;

/// Clone the database and convert it into a dated CSV file.
#[derive(clap::Args, Debug)]
pub struct Convert {
    #[command(flatten)]
    source: SourceArguments,

    #[command(flatten)]
    links: LinkArguments,

    /// Directory to write the CSV file to.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

impl CommandDefaults for Convert {}

impl From<Convert> for Options {
    fn from(value: Convert) -> Self {
        Self {
            repository: value.source.repository,
            work_dir: value.source.work_dir,
            advisory_dir: value.source.advisories,
            output_dir: value.output_dir,
            links: value.links.into(),
        }
    }
}

impl Convert {
    pub fn run<P: Progress>(self, progress: P) -> anyhow::Result<()> {
        let mut lifecycle = Lifecycle::new(self.into(), GitFetcher).with_progress(progress);

        let outcome = lifecycle
            .run()
            .with_context(|| format!("Conversion failed after stage: {}", lifecycle.stage()))?;

        log::info!(
            "Converted {} vulnerabilities into {}",
            outcome.records,
            outcome.output.display()
        );

        Ok(())
    }
}
