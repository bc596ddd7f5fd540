pub mod stream_aggregator;

pub use stream_aggregator::{AggregationStats, StreamAggregator};
