pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod utils;

pub use error::{ProcessingError, Result};
