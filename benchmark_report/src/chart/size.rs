//!
//! Metric-vs-size series of the current suite run.
//!

use std::collections::HashMap;

use crate::chart::dataset::Dataset;
use crate::chart::palette;
use crate::chart::point::Point;
use crate::chart::series_key::SeriesKey;
use crate::chart::ChartData;
use crate::metric::Metric;
use crate::model::suite::benchmark::Benchmark;

///
/// Builds one line per duration key and `(cluster size, length)` pair.
///
/// Keys and pairs are taken in first-seen order, and the points of each line
/// are sorted by ascending size. Results that did not measure a key are
/// skipped for it. Colors are assigned from the palette by line creation order.
///
pub fn size_series(benchmark: &Benchmark, metric: Metric) -> ChartData {
    let mut datasets = Vec::new();

    for key in benchmark.duration_keys() {
        let mut groups: Vec<(SeriesKey, Vec<(u64, f64)>)> = Vec::new();
        let mut group_ids: HashMap<SeriesKey, usize> = HashMap::new();

        for result in benchmark.results_with_key(key) {
            let duration = match result.duration(key) {
                Some(duration) => duration,
                None => continue,
            };

            let series_key = SeriesKey::from(&result.run_config);
            let group_id = *group_ids.entry(series_key).or_insert_with(|| {
                groups.push((series_key, Vec::new()));
                groups.len() - 1
            });
            groups[group_id]
                .1
                .push((result.run_config.size, duration.get(metric)));
        }

        for (series_key, mut points) in groups.into_iter() {
            points.sort_by_key(|(size, _)| *size);
            let label = format!(
                "{key} - Cluster: {}, Length: {} ({})",
                series_key.cluster_size,
                series_key.length,
                metric.to_string().to_uppercase(),
            );
            let data = points
                .into_iter()
                .map(|(size, value)| Point::new(size as f64, value))
                .collect();
            let color = palette::color(datasets.len());
            datasets.push(Dataset::new(label, data, color));
        }
    }

    datasets.into()
}
