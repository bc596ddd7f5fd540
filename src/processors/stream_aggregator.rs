use std::collections::HashMap;
use std::io::{Read, Write};

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::error::Result;
use crate::models::{DailySummary, Observation, RawObservation};
use crate::utils::constants::OUTPUT_HEADER;

/// Totals from one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    pub rows_read: usize,
    pub stations: usize,
    pub summaries: usize,
}

/// Two-level grouping of summaries: station, then calendar date. Iteration
/// order for output is first-seen order at both levels, tracked by explicit
/// key lists since `HashMap` iteration order is unspecified.
#[derive(Debug, Default)]
struct SummaryTable {
    station_order: Vec<String>,
    stations: HashMap<String, DaySummaries>,
}

#[derive(Debug, Default)]
struct DaySummaries {
    date_order: Vec<String>,
    days: HashMap<String, DailySummary>,
}

impl SummaryTable {
    /// Fold one reading into its (station, date) summary, creating and
    /// seeding the summary on the group's first appearance.
    fn record(&mut self, observation: Observation) {
        let Observation {
            station,
            date,
            hour,
            temperature,
        } = observation;

        if !self.stations.contains_key(&station) {
            self.station_order.push(station.clone());
        }
        let summaries = self.stations.entry(station).or_default();

        if !summaries.days.contains_key(&date) {
            summaries.date_order.push(date.clone());
        }
        summaries
            .days
            .entry(date)
            .and_modify(|summary| {
                summary.update_first(hour, temperature);
                summary.update_last(hour, temperature);
                summary.update_min(temperature);
                summary.update_max(temperature);
            })
            .or_insert_with(|| DailySummary::new(hour, temperature));
    }

    fn write_rows<W: Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        for station in &self.station_order {
            if let Some(summaries) = self.stations.get(station) {
                for date in &summaries.date_order {
                    if let Some(summary) = summaries.days.get(date) {
                        let [min, max, first, last] = summary.output();
                        writer.write_record([
                            station.as_str(),
                            date.as_str(),
                            min.as_str(),
                            max.as_str(),
                            first.as_str(),
                            last.as_str(),
                        ])?;
                    }
                }
            }
        }
        Ok(())
    }

    fn summary_count(&self) -> usize {
        self.stations.values().map(|s| s.date_order.len()).sum()
    }
}

/// Single-pass streaming aggregator: reads hourly readings from an input
/// stream in whatever order they arrive and writes one summary row per
/// distinct (station, date) pair once the input is exhausted.
pub struct StreamAggregator;

impl StreamAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Consume `input` fully and write the summary CSV to `output`.
    ///
    /// Any malformed row (bad timestamp, bad temperature, missing required
    /// column) aborts the run before output is written. The output stream is
    /// flushed but not closed; rows are `\n`-terminated.
    pub fn process<R: Read, W: Write>(&self, input: R, output: W) -> Result<AggregationStats> {
        let mut reader = csv::Reader::from_reader(input);
        let mut table = SummaryTable::default();
        let mut rows_read = 0;

        for row in reader.deserialize::<RawObservation>() {
            let observation = row?.parse()?;
            table.record(observation);
            rows_read += 1;
        }

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(output);
        writer.write_record(OUTPUT_HEADER)?;
        table.write_rows(&mut writer)?;
        writer.flush()?;

        let stats = AggregationStats {
            rows_read,
            stations: table.station_order.len(),
            summaries: table.summary_count(),
        };
        debug!(
            rows_read = stats.rows_read,
            stations = stats.stations,
            summaries = stats.summaries,
            "aggregation pass complete"
        );
        Ok(stats)
    }
}

impl Default for StreamAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn process(input: &str) -> (String, AggregationStats) {
        let mut output = Vec::new();
        let stats = StreamAggregator::new()
            .process(Cursor::new(input), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn test_single_group_reduction() {
        let input = "\
Station Name,Measurement Timestamp,Air Temperature
Oak Street,01/15/2024 09:00:00 AM,10.0
Oak Street,01/15/2024 12:00:00 PM,20.0
Oak Street,01/15/2024 03:00:00 PM,5.0
";
        let (output, stats) = process(input);

        assert_eq!(
            output,
            "Station Name,Date,Min Temp,Max Temp,First Temp,Last Temp\n\
             Oak Street,01/15/2024,5.0,20.0,10.0,5.0\n"
        );
        assert_eq!(
            stats,
            AggregationStats {
                rows_read: 3,
                stations: 1,
                summaries: 1
            }
        );
    }

    #[test]
    fn test_station_order_is_first_seen() {
        let input = "\
Station Name,Measurement Timestamp,Air Temperature
Foster,06/01/2023 10:00:00 AM,18.0
Adler,06/01/2023 08:00:00 AM,15.5
Foster,06/01/2023 11:00:00 AM,19.0
";
        let (output, stats) = process(input);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[1].starts_with("Foster,"));
        assert!(lines[2].starts_with("Adler,"));
        assert_eq!(stats.stations, 2);
        assert_eq!(stats.summaries, 2);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let input = "\
Station Name,Measurement Timestamp,Air Temperature,Wet Bulb Temperature,Humidity
Oak Street,01/15/2024 09:00:00 AM,10.0,8.5,63
";
        let (output, _) = process(input);
        assert_eq!(
            output,
            "Station Name,Date,Min Temp,Max Temp,First Temp,Last Temp\n\
             Oak Street,01/15/2024,10.0,10.0,10.0,10.0\n"
        );
    }

    #[test]
    fn test_missing_required_column_fails() {
        let input = "\
Station Name,Measurement Timestamp
Oak Street,01/15/2024 09:00:00 AM
";
        let mut output = Vec::new();
        let result = StreamAggregator::new().process(Cursor::new(input), &mut output);
        assert!(result.is_err());
    }
}
