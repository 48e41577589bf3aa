use client::{
  cli::CommandLine,
  runner::Runner,
  scenario::scenarios,
};
use simple_logger::SimpleLogger;
use log::{info, LevelFilter};
use std::io;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  SimpleLogger::new().with_level(LevelFilter::Info).init()?;

  let args = CommandLine::parse_args();
  let runner = Runner::new(reqwest::Client::new(), &args.base_url);
  let scenarios = scenarios()?;
  info!("Running {} examples against {}", scenarios.len(), runner.base_url());

  runner.run(&scenarios, &mut io::stdout()).await?;
  Ok(())
}
