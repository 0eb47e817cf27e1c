use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::io::BufRead;

use crate::models::{Point, Track};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("document is not a GPX track: {0}")]
    Structural(String),

    #[error("point {index}: bad time - {source}")]
    Point {
        index: usize,
        #[source]
        source: chrono::ParseError,
    },
}

impl From<quick_xml::DeError> for DecodeError {
    fn from(err: quick_xml::DeError) -> Self {
        DecodeError::Structural(err.to_string())
    }
}

/// `<gpx>` root, only the parts we read
#[derive(Debug, Deserialize)]
struct GpxDocument {
    #[serde(default)]
    metadata: Option<MetadataElement>,
    #[serde(rename = "trk", default)]
    tracks: Vec<TrackElement>,
}

#[derive(Debug, Deserialize)]
struct MetadataElement {
    #[serde(default)]
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrackElement {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "trkseg", default)]
    segments: Vec<SegmentElement>,
}

#[derive(Debug, Deserialize)]
struct SegmentElement {
    #[serde(rename = "trkpt", default)]
    points: Vec<PointElement>,
}

#[derive(Debug, Deserialize)]
struct PointElement {
    #[serde(rename = "@lat")]
    lat: f64,
    #[serde(rename = "@lon")]
    lon: f64,
    time: String,
}

fn parse_time(text: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text.trim())
}

/// Decode a GPX document into a [`Track`].
///
/// Reads the first track's first segment. Fails on the first point whose
/// time cannot be parsed, so a partial track is never returned.
pub fn decode<R: BufRead>(reader: R) -> Result<Track, DecodeError> {
    let document: GpxDocument = quick_xml::de::from_reader(reader)?;

    let start_time = document
        .metadata
        .and_then(|metadata| metadata.time)
        .map(|text| {
            parse_time(&text)
                .map_err(|e| DecodeError::Structural(format!("bad metadata time - {}", e)))
        })
        .transpose()?;

    let track_count = document.tracks.len();
    let track = document
        .tracks
        .into_iter()
        .next()
        .ok_or_else(|| DecodeError::Structural("missing trk element".to_string()))?;

    let segment_count = track.segments.len();
    let segment = track
        .segments
        .into_iter()
        .next()
        .ok_or_else(|| DecodeError::Structural("missing trkseg element".to_string()))?;

    if track_count > 1 || segment_count > 1 {
        tracing::warn!(
            "Only the first segment is read ({} tracks, {} segments in first track)",
            track_count,
            segment_count
        );
    }

    let points = segment
        .points
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            let time = parse_time(&point.time).map_err(|source| DecodeError::Point { index, source })?;
            Ok(Point::new(point.lat, point.lon, time))
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    Ok(Track {
        name: track.name.unwrap_or_default(),
        time: start_time,
        points,
    })
}
