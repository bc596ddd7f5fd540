use crate::utils::format::format_temperature;

/// Running aggregate for one weather station on one calendar day: minimum
/// and maximum temperature, plus the temperatures recorded at the earliest
/// and latest hours seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    min_temp: f64,
    max_temp: f64,
    first_hour: u32,
    first_temp: f64,
    last_hour: u32,
    last_temp: f64,
}

impl DailySummary {
    /// Seed every field from the first observation of the group.
    pub fn new(hour: u32, temperature: f64) -> Self {
        Self {
            min_temp: temperature,
            max_temp: temperature,
            first_hour: hour,
            first_temp: temperature,
            last_hour: hour,
            last_temp: temperature,
        }
    }

    /// Take the new reading as the earliest only if its hour is strictly
    /// earlier; a reading that ties the incumbent hour never replaces it.
    pub fn update_first(&mut self, hour: u32, temperature: f64) {
        if hour < self.first_hour {
            self.first_hour = hour;
            self.first_temp = temperature;
        }
    }

    /// Take the new reading as the latest only if its hour is strictly later.
    pub fn update_last(&mut self, hour: u32, temperature: f64) {
        if hour > self.last_hour {
            self.last_hour = hour;
            self.last_temp = temperature;
        }
    }

    pub fn update_min(&mut self, temperature: f64) {
        self.min_temp = self.min_temp.min(temperature);
    }

    pub fn update_max(&mut self, temperature: f64) {
        self.max_temp = self.max_temp.max(temperature);
    }

    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    pub fn first_temp(&self) -> f64 {
        self.first_temp
    }

    pub fn last_temp(&self) -> f64 {
        self.last_temp
    }

    /// Render the four summary values as output fields, in column order.
    pub fn output(&self) -> [String; 4] {
        [
            format_temperature(self.min_temp),
            format_temperature(self.max_temp),
            format_temperature(self.first_temp),
            format_temperature(self.last_temp),
        ]
    }
}
