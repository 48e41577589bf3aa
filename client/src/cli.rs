use clap::Parser;
use crate::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "item-examples")]
#[command(about = "Walks through the item inventory API, one example request at a time.")]
pub struct CommandLine {
  /// Base URL of the running API server
  #[arg(long, default_value = DEFAULT_BASE_URL)]
  pub base_url: String,
}

impl CommandLine {
  pub fn parse_args() -> Self { Self::parse() }
}
