use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use tracing::Level;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::StreamAggregator;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let input = File::open(&cli.input)?;
    let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, input);

    // Keep the terminal quiet when the summary itself goes to stdout.
    let to_stdout = cli.output.is_none();
    let progress = ProgressReporter::new_spinner("Aggregating readings...", to_stdout);

    let aggregator = StreamAggregator::new();
    let stats = match &cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            let stats = aggregator.process(reader, &mut writer)?;
            writer.flush()?;
            stats
        }
        None => {
            let stdout = io::stdout();
            aggregator.process(reader, stdout.lock())?
        }
    };

    progress.finish_with_message(&format!(
        "Summarized {} readings into {} station-day rows across {} stations",
        stats.rows_read, stats.summaries, stats.stations
    ));

    Ok(())
}
