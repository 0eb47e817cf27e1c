pub mod gpx_decoder;
pub mod minute_aggregator;
pub mod stats;
