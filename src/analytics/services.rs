//! Series shaping for the dashboard charts.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Chart series cap. Matches what the dashboard renders without scrolling.
const MAX_GROUPS: usize = 50;

#[derive(Default)]
struct Average {
    sum: f64,
    count: u32,
}

impl Average {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

/// Buckets raw readings by calendar minute and averages each bucket, keeping
/// the newest 50 minutes in ascending order. Missing values are skipped, so
/// a minute where one column is entirely absent averages to `null`.
pub fn minute_series(
    points: Vec<(DateTime<Utc>, Option<f64>, Option<f64>)>,
    first_name: &str,
    second_name: &str,
) -> Vec<Value> {
    let mut buckets: BTreeMap<String, (Average, Average)> = BTreeMap::new();
    for (timestamp, first, second) in points {
        let key = timestamp.format("%Y-%m-%d %H:%M").to_string();
        let bucket = buckets.entry(key).or_default();
        bucket.0.push(first);
        bucket.1.push(second);
    }

    let series: Vec<(String, (Average, Average))> = buckets.into_iter().collect();
    let start = series.len().saturating_sub(MAX_GROUPS);
    series[start..]
        .iter()
        .map(|(minute, (first, second))| {
            json!({
                "time": &minute[11..],
                first_name: first.value(),
                second_name: second.value(),
            })
        })
        .collect()
}
