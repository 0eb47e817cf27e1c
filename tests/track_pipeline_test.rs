mod common;

use chrono::{DateTime, Timelike};
use common::{gpx_with_points, morning_walk_gpx, WALK_MINUTES, WALK_NAME, WALK_POINTS};
use track_viewer::{aggregate_by_minute, centroid, decode, DecodeError, MapView};

#[test]
fn test_decode_morning_walk() {
    let gpx = morning_walk_gpx();
    let track = decode(gpx.as_bytes()).expect("Should decode fixture");

    assert_eq!(track.name, WALK_NAME);
    assert_eq!(track.points.len(), WALK_POINTS);
    assert_eq!(
        track.time,
        Some(DateTime::parse_from_rfc3339("2024-05-01T06:00:00+03:00").unwrap())
    );

    // Document order is preserved
    assert!(track
        .points
        .windows(2)
        .all(|pair| pair[0].time < pair[1].time && pair[0].lat < pair[1].lat));
}

#[test]
fn test_aggregate_morning_walk() {
    let gpx = morning_walk_gpx();
    let track = decode(gpx.as_bytes()).unwrap();

    let minutes = aggregate_by_minute(&track.points);
    assert_eq!(minutes.len(), WALK_MINUTES);

    for (i, point) in minutes.iter().enumerate() {
        assert_eq!(point.time.minute() as usize, i);
        assert_eq!(point.time.second(), 0);
        assert_eq!(point.time.nanosecond(), 0);
        assert_eq!(point.time.offset().local_minus_utc(), 3 * 3600);
    }

    // Aggregation leaves the decoded track alone
    assert_eq!(track.points.len(), WALK_POINTS);
}

#[test]
fn test_view_of_morning_walk() {
    let gpx = morning_walk_gpx();
    let track = decode(gpx.as_bytes()).unwrap();

    let view = MapView::from_track(&track).unwrap();
    assert_eq!(view.name, WALK_NAME);
    assert_eq!(view.date, "2024-05-01");
    assert_eq!(view.points.len(), WALK_MINUTES);
    assert_eq!(view.points.first().unwrap().time, "06:00");
    assert_eq!(view.points.last().unwrap().time, "06:53");

    // Center comes from every fix, not the minute averages
    let (lat, lng) = centroid(&track.points).unwrap();
    assert_eq!(view.center.lat, lat);
    assert_eq!(view.center.lng, lng);
}

#[test]
fn test_point_count_matches_document() {
    for count in [0usize, 1, 2, 17] {
        let times: Vec<String> = (0..count)
            .map(|i| format!("2024-05-01T06:{:02}:{:02}Z", i / 60, i % 60))
            .collect();
        let points: Vec<(f64, f64, &str)> = times
            .iter()
            .map(|t| (1.0, 2.0, t.as_str()))
            .collect();

        let track = decode(gpx_with_points(&points).as_bytes()).unwrap();
        assert_eq!(track.points.len(), count);
    }
}

#[test]
fn test_bucket_means_end_to_end() {
    let gpx = gpx_with_points(&[
        (1.0, 2.0, "2024-05-01T06:00:01Z"),
        (3.0, 4.0, "2024-05-01T06:00:31Z"),
        (7.0, -9.5, "2024-05-01T06:02:00Z"),
    ]);
    let track = decode(gpx.as_bytes()).unwrap();
    let minutes = aggregate_by_minute(&track.points);

    assert_eq!(minutes.len(), 2);
    assert_eq!((minutes[0].lat, minutes[0].lng), (2.0, 3.0));
    assert_eq!((minutes[1].lat, minutes[1].lng), (7.0, -9.5));
    assert_eq!(minutes[1].time.to_rfc3339(), "2024-05-01T06:02:00+00:00");
}

#[test]
fn test_bad_time_reports_index() {
    let gpx = gpx_with_points(&[
        (1.0, 2.0, "2024-05-01T06:00:01Z"),
        (1.0, 2.0, "2024-13-01T06:00:01Z"),
    ]);

    match decode(gpx.as_bytes()) {
        Err(DecodeError::Point { index, .. }) => assert_eq!(index, 1),
        other => panic!("Expected point error, got {:?}", other),
    }
}
