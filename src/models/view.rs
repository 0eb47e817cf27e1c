use serde::Serialize;

use super::track::{Point, Track};
use crate::libraries::{
    minute_aggregator::aggregate_by_minute,
    stats::{centroid, AggregationInputError},
};

/// Date shown in the page header
const DATE_FORMAT: &str = "%Y-%m-%d";
/// 24-hour HH:MM
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewPoint {
    pub lat: f64,
    pub lng: f64,
    pub time: String,
}

impl From<&Point> for ViewPoint {
    fn from(point: &Point) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
            time: point.time.format(TIME_FORMAT).to_string(),
        }
    }
}

/// Everything the map page needs to render a track.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub name: String,
    pub date: String,
    pub center: Center,
    pub points: Vec<ViewPoint>,
}

impl MapView {
    /// Build the view for a decoded track.
    ///
    /// The center is taken over every recorded point, while the markers are
    /// the per-minute averages. Fails when the track has no points.
    pub fn from_track(track: &Track) -> Result<Self, AggregationInputError> {
        let (lat, lng) = centroid(&track.points)?;

        let points = aggregate_by_minute(&track.points)
            .iter()
            .map(ViewPoint::from)
            .collect();

        Ok(Self {
            name: track.name.clone(),
            date: track
                .time
                .map(|time| time.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            center: Center { lat, lng },
            points,
        })
    }
}
