#![allow(dead_code)]

use chrono::{DateTime, SecondsFormat, TimeDelta};

pub const WALK_NAME: &str = "Morning Walk";
pub const WALK_POINTS: usize = 2600;
/// 2600 fixes, 1.246s apart, starting on a minute boundary
pub const WALK_MINUTES: usize = 54;

const WALK_START: &str = "2024-05-01T06:00:00+03:00";
const WALK_INTERVAL_MS: i64 = 1246;

/// A Strava-style export of a walk, one fix every 1.246 seconds
pub fn morning_walk_gpx() -> String {
    let start = DateTime::parse_from_rfc3339(WALK_START).unwrap();

    let mut gpx = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx creator="StravaGPX" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="1.1" xmlns="http://www.topografix.com/GPX/1/1">
 <metadata>
  <time>2024-05-01T06:00:00+03:00</time>
 </metadata>
 <trk>
  <name>Morning Walk</name>
  <type>10</type>
  <trkseg>
"#,
    );

    for i in 0..WALK_POINTS as i64 {
        let time = start + TimeDelta::milliseconds(i * WALK_INTERVAL_MS);
        let lat = 32.0853 + i as f64 * 0.00001;
        let lon = 34.7818 + (i % 100) as f64 * 0.00001;
        gpx.push_str(&format!(
            "   <trkpt lat=\"{:.7}\" lon=\"{:.7}\">\n    <ele>{:.1}</ele>\n    <time>{}</time>\n   </trkpt>\n",
            lat,
            lon,
            12.0 + (i % 7) as f64 * 0.2,
            time.to_rfc3339_opts(SecondsFormat::Millis, false)
        ));
    }

    gpx.push_str("  </trkseg>\n </trk>\n</gpx>\n");
    gpx
}

pub fn gpx_with_points(points: &[(f64, f64, &str)]) -> String {
    let mut gpx = String::from("<gpx><trk><name>Test</name><trkseg>\n");
    for (lat, lon, time) in points {
        gpx.push_str(&format!(
            "<trkpt lat=\"{}\" lon=\"{}\"><time>{}</time></trkpt>\n",
            lat, lon, time
        ));
    }
    gpx.push_str("</trkseg></trk></gpx>");
    gpx
}
