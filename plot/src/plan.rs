use std::path::{Path, PathBuf};
use wrk_bench_report::metric::Metric;
use wrk_bench_report::plotting::render::ChartRequest;
use wrk_bench_report::series::Series;

/// A chart to render and the file it goes to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJob {
    pub request: ChartRequest,
    pub output_path: PathBuf,
}

/// Charts for the loaded series: throughput and p99 latency always, average
/// and p50 latency on request, connect errors only when some run had any.
pub fn chart_plan(
    series: &[Series],
    output_dir: &Path,
    all_metrics: bool,
    log_x_axis: bool,
    dark: bool,
) -> Vec<ChartJob> {
    let mut metrics = vec![Metric::RequestsPerSec, Metric::P99Latency];
    if all_metrics {
        metrics.push(Metric::AvgLatency);
        metrics.push(Metric::P50Latency);
    }
    if series.iter().any(Series::has_connect_errors) {
        metrics.push(Metric::ConnectErrors);
    }

    metrics
        .into_iter()
        .map(|metric| ChartJob {
            request: ChartRequest::for_metric(metric, log_x_axis, dark),
            output_path: output_dir.join(metric.file_name()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrk_bench_report::record::BenchmarkRecord;

    fn series(label: &str, connect_errors: &[u64]) -> Series {
        let records = connect_errors
            .iter()
            .enumerate()
            .map(|(index, &connect_errors)| BenchmarkRecord {
                connections: (index as u64 + 1) * 10,
                requests_per_sec: 100.0,
                avg_latency_ms: 1.0,
                p50_latency_ms: 1.0,
                p99_latency_ms: 2.0,
                connect_errors,
                socket_errors: None,
            })
            .collect();
        Series::new(label, records)
    }

    fn metrics(jobs: &[ChartJob]) -> Vec<Metric> {
        jobs.iter().map(|job| job.request.metric).collect()
    }

    #[test]
    fn connect_errors_chart_should_be_planned_when_any_series_has_errors() {
        let series = vec![series("bun", &[0, 0, 12]), series("node", &[0, 0])];

        let jobs = chart_plan(&series, Path::new("."), false, true, false);

        assert_eq!(
            metrics(&jobs),
            vec![
                Metric::RequestsPerSec,
                Metric::P99Latency,
                Metric::ConnectErrors
            ]
        );
        assert_eq!(
            jobs[2].output_path,
            PathBuf::from("./connect_errors_vs_connections.png")
        );
    }

    #[test]
    fn connect_errors_chart_should_be_skipped_without_errors() {
        let series = vec![series("bun", &[0, 0]), series("node", &[0])];

        let jobs = chart_plan(&series, Path::new("charts"), false, false, false);

        assert_eq!(metrics(&jobs), vec![Metric::RequestsPerSec, Metric::P99Latency]);
        assert_eq!(
            jobs[0].output_path,
            PathBuf::from("charts/rps_vs_connections.png")
        );
        assert_eq!(
            jobs[1].output_path,
            PathBuf::from("charts/p99_latency_vs_connections.png")
        );
        assert!(!jobs[0].request.log_x_axis);
    }

    #[test]
    fn all_metrics_should_add_average_and_median_latency() {
        let series = vec![series("bun", &[0]), Series::empty("node")];

        let jobs = chart_plan(&series, Path::new("."), true, true, true);

        assert_eq!(
            metrics(&jobs),
            vec![
                Metric::RequestsPerSec,
                Metric::P99Latency,
                Metric::AvgLatency,
                Metric::P50Latency
            ]
        );
        assert!(jobs.iter().all(|job| job.request.dark));
    }
}
