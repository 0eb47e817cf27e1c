use chrono::{DateTime, FixedOffset};

/// A single GPS fix. The timestamp keeps the offset it was recorded with.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
    pub time: DateTime<FixedOffset>,
}

impl Point {
    pub fn new(lat: f64, lng: f64, time: DateTime<FixedOffset>) -> Self {
        Self { lat, lng, time }
    }
}

/// One decoded GPX document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    /// Empty when the document has no `trk/name`
    pub name: String,
    /// `metadata/time`, when present
    pub time: Option<DateTime<FixedOffset>>,
    /// Document order, one entry per `trkpt`
    pub points: Vec<Point>,
}

impl Track {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
