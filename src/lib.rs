pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

pub use libraries::{
    gpx_decoder::{decode, DecodeError},
    minute_aggregator::aggregate_by_minute,
    stats::{centroid, mean, AggregationInputError},
};
pub use models::{MapView, Point, Track};
