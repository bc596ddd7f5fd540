pub mod daily_summary;
pub mod observation;

pub use daily_summary::DailySummary;
pub use observation::{Observation, RawObservation};
