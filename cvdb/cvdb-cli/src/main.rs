#![forbid(unsafe_code)]

mod cmd;

use clap::Parser;
use cmd::{convert::Convert, parse::Parse};
use cvdb_common::{cli::CommandDefaults, cli::log::Logging, utils::measure::MeasureTime};
use std::{ops::Deref, process::ExitCode};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Convert the open cloud vulnerability database into CSV",
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    logging: Logging,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    Convert(Convert),
    Parse(Parse),
}

impl Deref for Command {
    type Target = dyn CommandDefaults;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Convert(cmd) => cmd,
            Self::Parse(cmd) => cmd,
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let progress = self
            .logging
            .init(&["cvdb", "cvdb_walker"], self.command.progress());

        log::debug!("Setup complete, start processing");

        let time = MeasureTime::new("Processing");
        match self.command {
            Command::Convert(cmd) => cmd.run(progress)?,
            Command::Parse(cmd) => cmd.run(progress)?,
        }
        drop(time);

        Ok(())
    }
}

fn main() -> ExitCode {
    if let Err(err) = Cli::parse().run() {
        log::error!("Failed to execute: {err}");
        for (n, cause) in err.chain().enumerate().skip(1) {
            log::info!("  {n}: {cause}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
