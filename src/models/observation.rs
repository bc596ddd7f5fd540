use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{OUTPUT_DATE_FORMAT, TIMESTAMP_FORMAT};

/// One input row, bound by header name. Columns beyond the three required
/// ones are ignored; a missing required column fails deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawObservation {
    #[serde(rename = "Station Name")]
    pub station: String,
    #[serde(rename = "Measurement Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Air Temperature")]
    pub temperature: String,
}

/// A validated reading, keyed and ordered the way the aggregation needs it:
/// calendar date rendered as `MM/DD/YYYY` and hour-of-day in 24-hour form.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station: String,
    pub date: String,
    pub hour: u32,
    pub temperature: f64,
}

impl RawObservation {
    /// Parse the timestamp and temperature fields. Any parse failure is
    /// fatal for the whole run and surfaces the underlying error.
    pub fn parse(self) -> Result<Observation> {
        let timestamp = NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .map_err(|source| ProcessingError::TimestampParse {
                value: self.timestamp.clone(),
                source,
            })?;

        let temperature = self
            .temperature
            .trim()
            .parse::<f64>()
            .map_err(|_| ProcessingError::InvalidTemperature {
                value: self.temperature.clone(),
            })?;

        Ok(Observation {
            station: self.station,
            date: timestamp.format(OUTPUT_DATE_FORMAT).to_string(),
            hour: timestamp.hour(),
            temperature,
        })
    }
}
