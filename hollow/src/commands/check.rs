use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use hollowgen_schema::HollowToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to hollow.toml (defaults to ./hollow.toml)
    #[arg(short, long, default_value = "hollow.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let hollow_toml = HollowToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(hollow_toml.manifest(), hollow_toml.path());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
