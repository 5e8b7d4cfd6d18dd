//! `tabsplit split <BILL>`: split a bill file.

use clap::Args;
use std::path::PathBuf;

use super::{render, OutputArgs};
use crate::bill::BillFile;
use crate::config::CliConfig;
use crate::error::CliResult;

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Bill file (.json or .toml).
    #[arg(value_name = "BILL")]
    pub bill: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &SplitArgs, config: &CliConfig) -> CliResult<String> {
    let bill = BillFile::load(&args.bill)?;
    let store = bill.to_store()?;
    let base = bill.tip.unwrap_or_else(|| config.tip_policy());
    let tip = args.output.resolve_tip(base);
    render(&store, &tip, &args.output, config)
}
