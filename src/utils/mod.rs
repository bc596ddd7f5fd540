pub mod constants;
pub mod format;
pub mod progress;

pub use constants::*;
pub use format::format_temperature;
pub use progress::ProgressReporter;
