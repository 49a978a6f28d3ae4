use crate::cmd::LinkArguments;
use anyhow::Context;
use cvdb_common::{cli::CommandDefaults, progress::Progress};
use cvdb_walker::{output, parse::AdvisoryParser};
use std::path::PathBuf;

/// Convert an advisory directory which is already present, without cloning or cleaning up.
#[derive(clap::Args, Debug)]
pub struct Parse {
    /// Directory containing the advisory files.
    directory: PathBuf,

    #[command(flatten)]
    links: LinkArguments,

    /// Output file, defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CommandDefaults for Parse {
    fn progress(&self) -> bool {
        self.output.is_some()
    }
}

impl Parse {
    pub fn run<P: Progress>(self, progress: P) -> anyhow::Result<()> {
        let records = AdvisoryParser::new(self.links.into())
            .parse_all(&self.directory, &progress)
            .with_context(|| format!("Failed to parse {}", self.directory.display()))?;

        match self.output {
            Some(path) => output::write_file(&records, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => output::write_records(&records, std::io::stdout().lock())
                .context("Failed to write to stdout")?,
        }

        Ok(())
    }
}
