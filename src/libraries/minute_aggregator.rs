use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};
use std::collections::BTreeMap;

use crate::models::Point;

/// Samples that fall into the same calendar minute
struct MinuteBucket {
    /// First sample's timestamp truncated to the minute, in its own offset
    time: DateTime<FixedOffset>,
    lat_sum: f64,
    lng_sum: f64,
    /// Never zero, a bucket is created from its first sample
    count: usize,
}

impl MinuteBucket {
    fn new(first: &Point) -> Self {
        Self {
            time: truncate_to_minute(first.time),
            lat_sum: first.lat,
            lng_sum: first.lng,
            count: 1,
        }
    }

    fn push(&mut self, point: &Point) {
        self.lat_sum += point.lat;
        self.lng_sum += point.lng;
        self.count += 1;
    }

    fn average(&self) -> Point {
        let count = self.count as f64;
        Point::new(self.lat_sum / count, self.lng_sum / count, self.time)
    }
}

/// Zero out seconds and sub-second fraction, keeping the offset.
pub fn truncate_to_minute(time: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    time - TimeDelta::seconds(i64::from(time.second()))
        - TimeDelta::nanoseconds(i64::from(time.nanosecond()))
}

/// Minutes since the epoch. Points with different offsets but the same
/// absolute minute share a key.
fn bucket_key(time: &DateTime<FixedOffset>) -> i64 {
    time.timestamp().div_euclid(60)
}

/// Collapse `points` into one averaged point per calendar minute.
///
/// Points are grouped by their truncated timestamp regardless of where they
/// appear in the input. Each output point carries the mean latitude and the
/// mean longitude of its group, timestamped at the start of the minute.
/// The output is sorted by time, ascending.
pub fn aggregate_by_minute(points: &[Point]) -> Vec<Point> {
    let mut buckets: BTreeMap<i64, MinuteBucket> = BTreeMap::new();

    for point in points {
        buckets
            .entry(bucket_key(&point.time))
            .and_modify(|bucket| bucket.push(point))
            .or_insert_with(|| MinuteBucket::new(point));
    }

    buckets.values().map(MinuteBucket::average).collect()
}
