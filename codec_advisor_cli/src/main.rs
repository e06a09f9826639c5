use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, Level};

use codec_advisor::ColumnSpec;

use crate::opt::AdvisorOpt;

mod opt;
mod parse;

fn init_logging(level: Level) -> Result<()> {
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .with_target(false)
    .finish();
  tracing::subscriber::set_global_default(subscriber)
    .map_err(|e| anyhow!("unable to install log subscriber: {}", e))
}

fn main() -> Result<()> {
  let opt = AdvisorOpt::parse();
  init_logging(opt.log_level)?;
  debug!(?opt, "parsed arguments");

  let spec = ColumnSpec::from(&opt);
  let rule = spec.classify();
  debug!(?rule, "chose codec");

  // the codec alone goes to stdout so callers can consume it verbatim
  println!("{}", rule.codec());
  Ok(())
}
