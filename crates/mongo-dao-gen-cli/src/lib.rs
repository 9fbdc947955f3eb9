mod config;
mod logging;
mod output;

pub use config::ConfigArgs;

use anyhow::{Context, Result};
use clap::Parser;
use mongo_dao_gen::{DryRunWriter, FsWriter, Generator};

/// Parse the process arguments and run
pub fn parse_and_run() -> Result<()> {
    Cli::parse().run()
}

/// Parse arguments from an iterator and run
pub fn parse_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(args).run()
}

#[derive(Parser, Debug)]
#[command(name = "mongo-dao-gen")]
#[command(about = "Generate MongoDB data access objects from model declarations")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the files that would be generated without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        logging::init(self.verbose);

        let config = self.config.resolve()?;
        let generator = Generator::new(config);

        output::heading(&generator, self.dry_run);

        if self.dry_run {
            let mut writer = DryRunWriter::new();
            let report = generator
                .run(&mut writer)
                .context("failed to generate DAOs")?;

            output::report(&report);
            output::dry_run(&writer);
        } else {
            let report = generator
                .run(&mut FsWriter)
                .context("failed to generate DAOs")?;

            output::report(&report);
        }

        Ok(())
    }
}
