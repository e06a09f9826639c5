use clap::Parser;
use tracing::Level;

use codec_advisor::ColumnSpec;

use crate::parse;

/// Suggest a ClickHouse codec for a column.
#[derive(Clone, Debug, Parser)]
#[command(name = "suggest_codec", version)]
pub struct AdvisorOpt {
  /// The ClickHouse data type, e.g. "DateTime" or "String".
  #[arg(long = "data_type")]
  pub data_type: String,
  /// Whether values strictly increase. "true", "1", and "yes" (any case)
  /// count as true; anything else is false.
  #[arg(
    long = "is_monotonic",
    default_value = "false",
    action = clap::ArgAction::Set,
    allow_negative_numbers = true,
    value_parser = parse::monotonic_flag,
  )]
  pub is_monotonic: bool,
  /// Verbosity of diagnostics written to stderr.
  #[arg(long, default_value_t = Level::WARN)]
  pub log_level: Level,
}

impl From<&AdvisorOpt> for ColumnSpec {
  fn from(opt: &AdvisorOpt) -> Self {
    ColumnSpec::new(&opt.data_type).with_monotonic(opt.is_monotonic)
  }
}
