use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-aggregator")]
#[command(about = "Aggregate hourly weather station readings into daily temperature summaries")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Input CSV file of hourly station readings")]
    pub input: PathBuf,

    #[arg(help = "Output CSV file [default: stdout]")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
