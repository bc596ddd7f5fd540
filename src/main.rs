use clap::Parser;
use weather_aggregator::cli::{run, Cli};
use weather_aggregator::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
