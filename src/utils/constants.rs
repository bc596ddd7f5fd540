/// Input timestamp format: 12-hour clock with meridiem indicator,
/// e.g. `01/15/2024 03:00:00 PM`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Date rendering used for the output `Date` column and grouping key.
pub const OUTPUT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Output column names, in order.
pub const OUTPUT_HEADER: [&str; 6] = [
    "Station Name",
    "Date",
    "Min Temp",
    "Max Temp",
    "First Temp",
    "Last Temp",
];

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
